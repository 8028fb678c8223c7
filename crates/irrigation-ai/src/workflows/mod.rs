pub mod irrigation;
