//! Este modulo permite leer los casos de prueba ya generados, de la misma forma
//! en la que los lee el worker, y verificar que sus salidas esperadas sean
//! correctas.

use std::{
    cmp::Ordering,
    fs::{self, File},
    path::{Path, PathBuf},
};

use crate::aliases::{Entrada, Salida};
use crate::caso::{self, CasoDePrueba};
use crate::errores::{ErrorDuranteParseo, ErrorVerificacion};
use crate::problema::doble_mas_menos;
use crate::{nombre_arch_salida, ARCHIVO_TESTS, DIR_ENTRADAS, DIR_SALIDAS};

/// Lee el archivo `tests.json` de una pregunta
pub fn leer_tests_json(dir_pregunta: &Path) -> Result<Vec<CasoDePrueba>, ErrorDuranteParseo> {
    let mut tests_json = File::open(dir_pregunta.join(ARCHIVO_TESTS))?;
    let casos = caso::from_reader(&mut tests_json)?;
    Ok(casos)
}

/// Lee los pares de archivos de entrada y salida de una pregunta. El id de cada
/// archivo de `input/` es su nombre sin el prefijo `input_` ni el sufijo `.txt`
/// (si los tiene), y se empareja con `output/output_{id}.txt`; las entradas sin
/// salida se ignoran. Los casos se devuelven ordenados por id.
pub fn leer_entradas_salidas(
    dir_pregunta: &Path,
) -> Result<Vec<CasoDePrueba>, ErrorDuranteParseo> {
    let dir_salidas = dir_pregunta.join(DIR_SALIDAS);
    let mut casos = Vec::new();

    for entrada in fs::read_dir(dir_pregunta.join(DIR_ENTRADAS))? {
        let entrada = entrada?;
        if !entrada.file_type()?.is_file() {
            continue;
        }
        let nombre = entrada.file_name().to_string_lossy().into_owned();
        let id = id_desde_nombre(&nombre);

        let input = match fs::read_to_string(entrada.path()) {
            Ok(input) => input,
            Err(_) => continue,
        };
        let expected_output = match fs::read_to_string(dir_salidas.join(nombre_arch_salida(id))) {
            Ok(salida) => salida,
            Err(_) => continue,
        };
        casos.push(CasoDePrueba::from_textos(id.to_string(), input, expected_output));
    }

    casos.sort_by(|a, b| comparar_ids(a.get_id(), b.get_id()));
    Ok(casos)
}

/// Obtiene el id de un archivo de entrada, quitando `.txt` y luego `input_`
fn id_desde_nombre(nombre: &str) -> &str {
    let sin_extension = nombre.strip_suffix(".txt").unwrap_or(nombre);
    sin_extension.strip_prefix("input_").unwrap_or(sin_extension)
}

/// Ordena los ids numericamente; los que no son numeros van al final, en orden
/// lexicografico
fn comparar_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Lista los directorios de preguntas que hay dentro del directorio base
pub fn listar_preguntas(base: &Path) -> Result<Vec<PathBuf>, ErrorDuranteParseo> {
    let mut preguntas = Vec::new();
    for entrada in fs::read_dir(base)? {
        let entrada = entrada?;
        if entrada.file_type()?.is_dir() {
            preguntas.push(entrada.path());
        }
    }
    preguntas.sort();
    Ok(preguntas)
}

/// Verifica que la salida esperada de cada caso corresponda a su entrada.
/// Devuelve los ids de los casos incorrectos, o que no se pudieron parsear.
pub fn verificar_casos(casos: &[CasoDePrueba]) -> Vec<String> {
    casos
        .iter()
        .filter(|caso| !caso_correcto(caso))
        .map(|caso| caso.get_id().to_string())
        .collect()
}

/// Verifica que haya al menos un caso y que los ids sean exactamente
/// "1".."N", en orden
pub fn verificar_ids(casos: &[CasoDePrueba]) -> Result<(), ErrorVerificacion> {
    if casos.is_empty() {
        return Err(ErrorVerificacion::SinCasos);
    }
    for (i, caso) in casos.iter().enumerate() {
        let esperado = (i + 1).to_string();
        if caso.get_id() != esperado {
            return Err(ErrorVerificacion::IdInesperado {
                esperado,
                encontrado: caso.get_id().to_string(),
            });
        }
    }
    Ok(())
}

fn caso_correcto(caso: &CasoDePrueba) -> bool {
    let entrada = caso.get_input().trim().parse::<Entrada>();
    let salida = caso.get_expected_output().trim().parse::<Salida>();
    match (entrada, salida) {
        (Ok(entrada), Ok(salida)) => doble_mas_menos(entrada) == salida,
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generators::{json_gen, txt_gen};

    fn casos_de_ejemplo() -> Vec<CasoDePrueba> {
        (1..=12).map(|i| CasoDePrueba::new(i, 7 - i as i32)).collect()
    }

    #[test]
    fn leer_json_generado() {
        let dir = tempfile::tempdir().unwrap();
        json_gen::generar_arch_tests_json(dir.path(), &casos_de_ejemplo()).unwrap();

        let casos = leer_tests_json(dir.path()).unwrap();
        assert_eq!(casos, casos_de_ejemplo());
        assert!(verificar_casos(&casos).is_empty());
    }

    #[test]
    fn leer_txt_ordena_por_id_numerico() {
        let dir = tempfile::tempdir().unwrap();
        txt_gen::generar_archs_entrada_salida(dir.path(), &casos_de_ejemplo()).unwrap();

        let casos = leer_entradas_salidas(dir.path()).unwrap();
        assert_eq!(casos, casos_de_ejemplo());
        assert_eq!(casos[9].get_id(), "10");
    }

    #[test]
    fn leer_txt_ignora_entradas_sin_salida() {
        let dir = tempfile::tempdir().unwrap();
        txt_gen::generar_archs_entrada_salida(dir.path(), &casos_de_ejemplo()).unwrap();
        fs::remove_file(dir.path().join("output/output_3.txt")).unwrap();
        fs::create_dir(dir.path().join("input/subdir")).unwrap();

        let casos = leer_entradas_salidas(dir.path()).unwrap();
        assert_eq!(casos.len(), 11);
        assert!(casos.iter().all(|c| c.get_id() != "3"));
    }

    #[test]
    fn leer_pregunta_inexistente() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            leer_tests_json(dir.path()),
            Err(ErrorDuranteParseo::NoSePudoAbrirArchivo(_))
        ));
        assert!(leer_entradas_salidas(dir.path()).is_err());
    }

    #[test]
    fn leer_json_invalido() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tests.json"), "{ roto").unwrap();
        assert!(matches!(
            leer_tests_json(dir.path()),
            Err(ErrorDuranteParseo::FormatoArchivoInvalido)
        ));
    }

    #[test]
    fn listar_solo_directorios() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("2")).unwrap();
        fs::create_dir(dir.path().join("1")).unwrap();
        fs::write(dir.path().join("notas.txt"), "x").unwrap();

        let preguntas = listar_preguntas(dir.path()).unwrap();
        assert_eq!(preguntas, vec![dir.path().join("1"), dir.path().join("2")]);
    }

    #[test]
    fn verificar_detecta_casos_incorrectos() {
        let casos = vec![
            CasoDePrueba::new(1, 5),
            CasoDePrueba::from_textos("2".into(), "5".into(), "10".into()),
            CasoDePrueba::from_textos("3".into(), "cinco".into(), "11".into()),
            CasoDePrueba::from_textos("4".into(), "0\n".into(), "-1\n".into()),
        ];
        assert_eq!(verificar_casos(&casos), vec!["2", "3"]);
    }

    #[test]
    fn leer_txt_empareja_archivos_sin_prefijo() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("input")).unwrap();
        fs::create_dir_all(dir.path().join("output")).unwrap();
        fs::write(dir.path().join("input/5.txt"), "5").unwrap();
        fs::write(dir.path().join("output/output_5.txt"), "11").unwrap();

        let casos = leer_entradas_salidas(dir.path()).unwrap();
        assert_eq!(
            casos,
            vec![CasoDePrueba::from_textos("5".into(), "5".into(), "11".into())]
        );
    }

    #[test]
    fn verificar_ids_consecutivos() {
        assert!(verificar_ids(&casos_de_ejemplo()).is_ok());
    }

    #[test]
    fn verificar_ids_sin_casos() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("input")).unwrap();

        let casos = leer_entradas_salidas(dir.path()).unwrap();
        assert!(casos.is_empty());
        assert!(matches!(verificar_ids(&casos), Err(ErrorVerificacion::SinCasos)));
    }

    #[test]
    fn verificar_ids_con_huecos() {
        let dir = tempfile::tempdir().unwrap();
        txt_gen::generar_archs_entrada_salida(dir.path(), &casos_de_ejemplo()).unwrap();
        fs::remove_file(dir.path().join("input/input_4.txt")).unwrap();

        let casos = leer_entradas_salidas(dir.path()).unwrap();
        assert!(verificar_casos(&casos).is_empty());
        match verificar_ids(&casos) {
            Err(ErrorVerificacion::IdInesperado {
                esperado,
                encontrado,
            }) => {
                assert_eq!(esperado, "4");
                assert_eq!(encontrado, "5");
            }
            _ => assert!(false),
        }
    }

    #[test]
    fn verificar_ids_duplicados() {
        let casos = vec![CasoDePrueba::new(1, 5), CasoDePrueba::new(1, 6)];
        assert!(matches!(
            verificar_ids(&casos),
            Err(ErrorVerificacion::IdInesperado { .. })
        ));
    }

    #[test]
    fn comparar_ids_mixtos() {
        let mut ids = vec!["10", "b", "2", "a", "1"];
        ids.sort_by(|a, b| comparar_ids(a, b));
        assert_eq!(ids, vec!["1", "2", "10", "a", "b"]);
    }
}
