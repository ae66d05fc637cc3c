// UI Components
// This module contains all reusable UI components

pub mod artist_card;
pub mod artwork_card;
pub mod artwork_grid;
pub mod artwork_upload_form;
pub mod collection_card;
pub mod collection_form;
pub mod collection_grid;
pub mod confirm_modal;
pub mod dropdown_menu;
pub mod icons;
pub mod notification_item;
pub mod paginated_footer;
pub mod profile_editor;
pub mod purchase_modal;
pub mod search_input;
pub mod tag_selector;
pub mod toast;
pub mod wallet_link_button;

pub use artist_card::{ArtistAvatar, ArtistCard, ArtistCardSkeleton, FollowButton};
pub use artwork_card::{ArtworkCard, ArtworkCardSkeleton};
pub use artwork_grid::ArtworkGrid;
pub use artwork_upload_form::ArtworkUploadForm;
pub use collection_card::{CollectionCard, CollectionCardSkeleton};
pub use collection_form::CollectionForm;
pub use collection_grid::CollectionGrid;
pub use confirm_modal::ConfirmModal;
pub use dropdown_menu::{DropdownMenu, MenuItem};
pub use notification_item::NotificationItem;
pub use paginated_footer::PaginatedFooter;
pub use profile_editor::ProfileEditor;
pub use purchase_modal::{PurchaseButton, PurchaseModal};
pub use search_input::SearchInput;
pub use tag_selector::TagSelector;
pub use wallet_link_button::WalletLinkButton;
