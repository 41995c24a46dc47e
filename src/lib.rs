use std::path::{Path, PathBuf};

use aliases::{CantidadCasos, IdPregunta, RangoEntrada};
use clap::ValueEnum;

pub mod aliases;
pub mod caso;
pub mod errores;
pub mod generators;
pub mod lector;
pub mod problema;

/// Obtiene el directorio de una pregunta, dentro del directorio base de preguntas
pub fn dir_pregunta(base: &Path, id: IdPregunta) -> PathBuf {
    base.join(id.to_string())
}

/// Directorio base donde el worker busca las preguntas
pub const DIR_PREGUNTAS: &str = "./Questions";

/// Pregunta para la que se generan los casos si no se indica otra
pub const PREGUNTA_POR_DEFECTO: IdPregunta = 2;

/// Cantidad de casos de prueba generados por corrida
pub const CANTIDAD_CASOS: CantidadCasos = 100;

/// Rango (inclusivo) del que se toman las entradas
pub const RANGO_ENTRADA: RangoEntrada = (-100, 100);

/// Nombre del archivo json con todos los casos
pub const ARCHIVO_TESTS: &str = "tests.json";

/// Nombre del archivo con el enunciado de la pregunta
pub const ARCHIVO_ENUNCIADO: &str = "question.txt";

/// Carpetas de entradas y salidas esperadas, una por caso
pub const DIR_ENTRADAS: &str = "input";
pub const DIR_SALIDAS: &str = "output";

/// Forma en la que se guardan los casos de una pregunta
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formato {
    /// Un unico archivo `tests.json`
    Json,
    /// Un par de archivos `input_{id}.txt` y `output_{id}.txt` por caso
    Txt,
    /// Ambas formas a la vez
    Ambos,
}

impl Formato {
    /// Indica si el formato incluye el archivo json
    pub fn incluye_json(self) -> bool {
        matches!(self, Formato::Json | Formato::Ambos)
    }

    /// Indica si el formato incluye los archivos de texto por caso
    pub fn incluye_txt(self) -> bool {
        matches!(self, Formato::Txt | Formato::Ambos)
    }
}

/// Nombre del archivo de entrada del caso dado
pub fn nombre_arch_entrada(id: &str) -> String {
    format!("input_{id}.txt")
}

/// Nombre del archivo de salida esperada del caso dado
pub fn nombre_arch_salida(id: &str) -> String {
    format!("output_{id}.txt")
}
