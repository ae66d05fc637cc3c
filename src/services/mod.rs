// Backend and wallet services
// REST endpoints grouped by resource, plus the EIP-1193 wallet bridge

pub mod api;
pub mod artists;
pub mod artworks;
pub mod auth;
pub mod collections;
pub mod contract;
pub mod ethereum;
pub mod feed;
pub mod notifications;
pub mod search;
pub mod tags;
pub mod wallet_link;
