//! Derivaciones al escribir registros de combustible
//!
//! `trip_miles` y `mpg` se calculan una vez al insertar o editar y se
//! guardan en la fila; las lecturas nunca los recalculan.

use rust_decimal::Decimal;

use crate::utils::errors::{bad_request_error, AppResult};

/// Millas de viaje y MPG derivados para una lectura
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripDerivation {
    pub trip_miles: Option<i64>,
    pub mpg: Option<f64>,
}

impl TripDerivation {
    /// Primera lectura de un vehículo: no hay viaje que medir
    pub fn first_reading() -> Self {
        Self {
            trip_miles: None,
            mpg: None,
        }
    }
}

/// MPG solo existe si hay galones positivos
pub fn compute_mpg(trip_miles: i64, gallons: Option<f64>) -> Option<f64> {
    match gallons {
        Some(g) if g > 0.0 => Some(trip_miles as f64 / g),
        _ => None,
    }
}

/// Reglas de entrada para un registro nuevo.
///
/// Con `odometer_only` los galones y el costo son opcionales; sin él, ambos
/// son obligatorios y positivos.
pub fn check_new_reading(
    odometer: i64,
    gallons: Option<f64>,
    total_cost: Option<Decimal>,
    odometer_only: bool,
) -> AppResult<()> {
    if odometer <= 0 {
        return Err(bad_request_error("Odometer reading must be greater than zero"));
    }

    if !odometer_only {
        match (gallons, total_cost) {
            (Some(g), Some(c)) if g > 0.0 && c > Decimal::ZERO => {}
            (None, _) | (_, None) => {
                return Err(bad_request_error(
                    "Please fill in gallons and cost, or mark the entry as odometer only",
                ))
            }
            _ => return Err(bad_request_error("Gallons and cost must be greater than zero")),
        }
    }

    Ok(())
}

/// Deriva un registro nuevo contra la lectura previa del vehículo
pub fn derive_new_reading(
    previous_odometer: Option<i64>,
    odometer: i64,
    gallons: Option<f64>,
) -> AppResult<TripDerivation> {
    let Some(previous) = previous_odometer else {
        return Ok(TripDerivation::first_reading());
    };

    if odometer <= previous {
        return Err(bad_request_error(
            "Odometer reading must be greater than the previous reading",
        ));
    }

    let trip_miles = odometer - previous;
    Ok(TripDerivation {
        trip_miles: Some(trip_miles),
        mpg: compute_mpg(trip_miles, gallons),
    })
}

/// Deriva un registro editado, acotado entre la lectura anterior y la siguiente
pub fn derive_edited_reading(
    previous_odometer: Option<i64>,
    next_odometer: Option<i64>,
    odometer: i64,
    gallons: Option<f64>,
) -> AppResult<TripDerivation> {
    if odometer <= 0 {
        return Err(bad_request_error("Odometer must be greater than zero"));
    }
    if matches!(gallons, Some(g) if g <= 0.0) {
        return Err(bad_request_error("Gallons must be greater than zero"));
    }

    if let Some(next) = next_odometer {
        if odometer >= next {
            return Err(bad_request_error(
                "Odometer cannot be greater than the next fuel log reading",
            ));
        }
    }

    match previous_odometer {
        None => Ok(TripDerivation::first_reading()),
        Some(previous) if odometer <= previous => Err(bad_request_error(
            "Odometer must be greater than the previous fuel log reading",
        )),
        Some(previous) => {
            let trip_miles = odometer - previous;
            Ok(TripDerivation {
                trip_miles: Some(trip_miles),
                mpg: compute_mpg(trip_miles, gallons),
            })
        }
    }
}
