mod bullet_points;

pub use bullet_points::{BulletPointPrinter, LineWriter};
#[cfg(test)]
pub use bullet_points::testutils;
