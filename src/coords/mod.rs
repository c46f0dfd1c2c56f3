mod ellipsoid;
mod transform;
mod types;

pub use ellipsoid::{Ellipsoid, WGS84};
pub use transform::{geodetic_to_ecef, sez_to_ecef, sez_to_ecef_rotation};
pub use types::{EcefVector, GeodeticPosition, SezVector};
