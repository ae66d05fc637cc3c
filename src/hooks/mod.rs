pub mod use_follow;
pub mod use_infinite_scroll;
pub mod use_lists;
pub mod use_paginated;
pub mod use_payment;

pub use use_follow::{use_follow, use_like, ToggleState, UseToggle};
pub use use_infinite_scroll::use_infinite_scroll;
pub use use_lists::*;
pub use use_paginated::{use_paginated_list, PageAccumulator, UsePaginatedList};
pub use use_payment::{use_payment, UsePayment};
