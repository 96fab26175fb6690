pub mod asof;
pub mod buckets;
pub mod nights;
pub mod overlaps;
pub mod timeline;
