//! Este modulo define la estructura de casos de prueba, los cuales son consumidos
//! por el worker para validar las soluciones enviadas

use std::{fmt, io::Read};

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::aliases::{Entrada, IdCaso};
use crate::problema::doble_mas_menos;

/// Un caso de prueba esta definido por un id, una entrada y la salida esperada.
/// Todos los campos se guardan como texto, que es lo que el worker espera.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CasoDePrueba {
    id: String,
    input: String,
    expected_output: String,
}

impl CasoDePrueba {
    /// Crea un nuevo caso para la entrada dada, calculando su salida esperada
    pub fn new(id: IdCaso, entrada: Entrada) -> Self {
        Self {
            id: id.to_string(),
            input: entrada.to_string(),
            expected_output: doble_mas_menos(entrada).to_string(),
        }
    }

    /// Crea un caso a partir de los textos leidos de disco, sin validarlos
    pub fn from_textos(id: String, input: String, expected_output: String) -> Self {
        Self {
            id,
            input,
            expected_output,
        }
    }

    /// Obtiene el ID del caso
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Obtiene la entrada del caso
    pub fn get_input(&self) -> &str {
        &self.input
    }

    /// Obtiene la salida esperada del caso
    pub fn get_expected_output(&self) -> &str {
        &self.expected_output
    }
}

impl fmt::Display for CasoDePrueba {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "caso {} ", self.id.blue())?;
        write!(
            f,
            "con entrada {} y salida esperada {}",
            self.input.blue(),
            self.expected_output.blue()
        )
    }
}

/// Lee el contenido de un `tests.json`: una lista de objetos con `id`, `input`
/// y `expected_output`, todos como texto.
pub fn from_reader(reader: &mut dyn Read) -> serde_json::Result<Vec<CasoDePrueba>> {
    serde_json::from_reader(reader)
}
