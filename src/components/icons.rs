use dioxus::prelude::*;

/// Icon size prop
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    #[props(default = "w-6 h-6".to_string())]
    pub class: String,
    #[props(default = false)]
    pub filled: bool,
}

/// 24x24 stroked outline shared by every icon
#[component]
fn Outline(class: String, #[props(default = false)] filled: bool, children: Element) -> Element {
    let fill = if filled { "currentColor" } else { "none" };
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

// Navigation

#[component]
pub fn HomeIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        }
    }
}

#[component]
pub fn CompassIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            circle { cx: "12", cy: "12", r: "10" }
            polygon { points: "16.24 7.76 14.12 14.12 7.76 16.24 9.88 9.88 16.24 7.76" }
        }
    }
}

#[component]
pub fn SearchIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn BellIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
            path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
        }
    }
}

#[component]
pub fn UserIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn ShoppingBagIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" }
            path { d: "M3 6h18" }
            path { d: "M16 10a4 4 0 0 1-8 0" }
        }
    }
}

#[component]
pub fn LogOutIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            polyline { points: "16 17 21 12 16 7" }
            line { x1: "21", x2: "9", y1: "12", y2: "12" }
        }
    }
}

// Content

#[component]
pub fn ImageIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            rect { width: "18", height: "18", x: "3", y: "3", rx: "2", ry: "2" }
            circle { cx: "9", cy: "9", r: "2" }
            path { d: "m21 15-3.09-3.09a2 2 0 0 0-2.82 0L6 21" }
        }
    }
}

#[component]
pub fn HeartIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class, filled: props.filled,
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        }
    }
}

#[component]
pub fn LockIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            rect { width: "18", height: "11", x: "3", y: "11", rx: "2", ry: "2" }
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        }
    }
}

#[component]
pub fn UploadIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "17 8 12 3 7 8" }
            line { x1: "12", x2: "12", y1: "3", y2: "15" }
        }
    }
}

#[component]
pub fn PlusIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M5 12h14" }
            path { d: "M12 5v14" }
        }
    }
}

// Wallet and status

#[component]
pub fn WalletIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1" }
            path { d: "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4" }
        }
    }
}

#[component]
pub fn ExternalLinkIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        }
    }
}

#[component]
pub fn CheckIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M20 6 9 17l-5-5" }
        }
    }
}

#[component]
pub fn XIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn AlertTriangleIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        }
    }
}

#[component]
pub fn RefreshIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "M21 2v6h-6" }
            path { d: "M3 12a9 9 0 0 1 15-6.7L21 8" }
            path { d: "M3 22v-6h6" }
            path { d: "M21 12a9 9 0 0 1-15 6.7L3 16" }
        }
    }
}

#[component]
pub fn ChevronDownIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            path { d: "m6 9 6 6 6-6" }
        }
    }
}

#[component]
pub fn MoreHorizontalIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: props.class,
            circle { cx: "12", cy: "12", r: "1" }
            circle { cx: "19", cy: "12", r: "1" }
            circle { cx: "5", cy: "12", r: "1" }
        }
    }
}

/// Spinning indicator for in-flight actions
#[component]
pub fn SpinnerIcon(props: IconProps) -> Element {
    rsx! {
        Outline { class: format!("{} animate-spin", props.class),
            path { d: "M21 12a9 9 0 1 1-6.22-8.56" }
        }
    }
}
