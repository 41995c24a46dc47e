//! Este modulo permite generar casos de prueba aleatorios, donde
//! el rango de las entradas y la cantidad de casos son parametrizables.
//! Los ids de los casos son consecutivos, empezando en 1.

use rand::Rng;

use crate::aliases::{CantidadCasos, RangoEntrada};
use crate::caso::CasoDePrueba;
use crate::errores::ErrorGeneracion;

/// Genera un vector aleatorio de casos de prueba, con los parametros dados.
/// Las entradas se toman de forma uniforme del rango inclusivo recibido.
pub fn generar_casos_aleatorios<R: Rng + ?Sized>(
    rng: &mut R,
    rango: RangoEntrada,
    cantidad: CantidadCasos,
) -> Result<Vec<CasoDePrueba>, ErrorGeneracion> {
    if rango.0 > rango.1 {
        return Err(ErrorGeneracion::RangoInvalido);
    }
    if cantidad == 0 {
        return Err(ErrorGeneracion::CantidadCero);
    }

    let casos = (1..=cantidad)
        .map(|id| {
            let entrada = rng.gen_range(rango.0..=rango.1);
            CasoDePrueba::new(id, entrada)
        })
        .collect();
    Ok(casos)
}
