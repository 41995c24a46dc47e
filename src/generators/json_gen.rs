//! Este modulo permite generar el archivo `tests.json` de una pregunta: una
//! lista de diccionarios con el id, la entrada y la salida esperada de cada
//! caso, indentada con 4 espacios.
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};

use crate::caso::CasoDePrueba;
use crate::errores::ErrorGeneracion;
use crate::ARCHIVO_TESTS;

/// A partir del directorio de una pregunta y de sus casos, genera el archivo
/// de tests. Crea el directorio si no existe, y pisa el archivo si ya existia.
/// Devuelve la ruta del archivo generado.
pub fn generar_arch_tests_json(
    dir_pregunta: &Path,
    casos: &[CasoDePrueba],
) -> Result<PathBuf, ErrorGeneracion> {
    fs::create_dir_all(dir_pregunta)?;
    let ruta = dir_pregunta.join(ARCHIVO_TESTS);
    let file = BufWriter::new(File::create(&ruta)?);

    let mut serializador = Serializer::with_formatter(file, PrettyFormatter::with_indent(b"    "));
    casos.serialize(&mut serializador)?;
    serializador.into_inner().flush()?;

    Ok(ruta)
}
