use super::{EcefVector, Ellipsoid, GeodeticPosition, SezVector};

/// Converts a geodetic position to ECEF Cartesian coordinates.
pub fn geodetic_to_ecef(position: &GeodeticPosition, ellipsoid: &Ellipsoid) -> EcefVector {
    let lat = position.lat_rad();
    let lon = position.lon_rad();
    let sin_lat = lat.sin();
    let cos_lat = lat.cos();
    let sin_lon = lon.sin();
    let cos_lon = lon.cos();

    let n = ellipsoid.prime_vertical_radius_km(lat);
    let h = position.height_km;

    EcefVector {
        x_km: (n + h) * cos_lat * cos_lon,
        y_km: (n + h) * cos_lat * sin_lon,
        z_km: (n * (1.0 - ellipsoid.eccentricity_squared()) + h) * sin_lat,
    }
}

/// Rotation taking SEZ components at the given observer angles into the
/// ECEF frame. Transpose of the ECEF-to-topocentric rotation; rows and
/// columns are orthonormal for any latitude/longitude.
pub fn sez_to_ecef_rotation(lat_rad: f64, lon_rad: f64) -> [[f64; 3]; 3] {
    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_lon = lon_rad.sin();
    let cos_lon = lon_rad.cos();

    [
        [sin_lat * cos_lon, -sin_lon, cos_lat * cos_lon],
        [sin_lat * sin_lon, cos_lon, cos_lat * sin_lon],
        [-cos_lat, 0.0, sin_lat],
    ]
}

/// Absolute ECEF position of a target given by its SEZ offset from an
/// observer on the ellipsoid.
pub fn sez_to_ecef(
    observer: &GeodeticPosition,
    offset: &SezVector,
    ellipsoid: &Ellipsoid,
) -> EcefVector {
    let origin = geodetic_to_ecef(observer, ellipsoid);
    let rot = sez_to_ecef_rotation(observer.lat_rad(), observer.lon_rad());

    let dx = rot[0][0] * offset.s_km + rot[0][1] * offset.e_km + rot[0][2] * offset.z_km;
    let dy = rot[1][0] * offset.s_km + rot[1][1] * offset.e_km + rot[1][2] * offset.z_km;
    let dz = rot[2][0] * offset.s_km + rot[2][1] * offset.e_km + rot[2][2] * offset.z_km;

    EcefVector {
        x_km: origin.x_km + dx,
        y_km: origin.y_km + dy,
        z_km: origin.z_km + dz,
    }
}
