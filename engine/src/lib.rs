pub mod types;
pub mod materials;
pub mod trade;
pub mod board;

pub use types::*;
pub use materials::{DevCardHand, Hand, Materials};
pub use trade::{TradeOffer, TradeResponse};
pub use board::{BoardSnapshot, BoardView, NodeInfo, RoadSpan, StaticBoard, Tile};
