//! Este modulo define el problema para el cual se generan los casos de prueba:
//! dado un entero x, devolver 2x+1 si x es positivo, o 2x-1 en otro caso.

use crate::aliases::{Entrada, Salida};

/// Enunciado de la pregunta, tal como lo lee el worker
pub const ENUNCIADO: &str =
    "Double and Add/Sub\nGiven an integer x, return 2x+1 if x>0, else 2x-1.";

/// Resuelve el problema para la entrada dada. La salida es de 64 bits, por lo
/// que nunca desborda.
pub fn doble_mas_menos(x: Entrada) -> Salida {
    let doble = 2 * Salida::from(x);
    if x > 0 {
        doble + 1
    } else {
        doble - 1
    }
}
