//! Este modulo permite generar los archivos de entrada y salida de una pregunta,
//! uno por caso: `input/input_{id}.txt` y `output/output_{id}.txt`, cada uno
//! con un unico valor y sin salto de linea final.
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::caso::CasoDePrueba;
use crate::errores::ErrorGeneracion;
use crate::problema::ENUNCIADO;
use crate::{nombre_arch_entrada, nombre_arch_salida, ARCHIVO_ENUNCIADO, DIR_ENTRADAS, DIR_SALIDAS};

/// A partir del directorio de una pregunta y de sus casos, genera los pares de
/// archivos de entrada y salida. Las carpetas `input/` y `output/` se vacian
/// antes, para que no queden casos de una corrida anterior. Devuelve el
/// directorio de la pregunta.
pub fn generar_archs_entrada_salida(
    dir_pregunta: &Path,
    casos: &[CasoDePrueba],
) -> Result<PathBuf, ErrorGeneracion> {
    let dir_entradas = dir_pregunta.join(DIR_ENTRADAS);
    let dir_salidas = dir_pregunta.join(DIR_SALIDAS);
    for dir in [&dir_entradas, &dir_salidas] {
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        fs::create_dir_all(dir)?;
    }

    for caso in casos {
        fs::write(
            dir_entradas.join(nombre_arch_entrada(caso.get_id())),
            caso.get_input(),
        )?;
        fs::write(
            dir_salidas.join(nombre_arch_salida(caso.get_id())),
            caso.get_expected_output(),
        )?;
    }

    Ok(dir_pregunta.to_path_buf())
}

/// Escribe el enunciado del problema en el directorio de la pregunta
pub fn generar_arch_enunciado(dir_pregunta: &Path) -> Result<PathBuf, ErrorGeneracion> {
    fs::create_dir_all(dir_pregunta)?;
    let ruta = dir_pregunta.join(ARCHIVO_ENUNCIADO);
    fs::write(&ruta, ENUNCIADO)?;
    Ok(ruta)
}
