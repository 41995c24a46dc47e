//! Lee los casos de prueba ya generados de una pregunta (o de todas las que haya
//! en el directorio base) y verifica que cada salida esperada corresponda a su
//! entrada. Termina con error si algun caso es incorrecto.

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use qgen::aliases::IdPregunta;
use qgen::caso::CasoDePrueba;
use qgen::errores::{Error, ErrorDuranteParseo};
use qgen::lector;
use qgen::{dir_pregunta, Formato, DIR_PREGUNTAS, PREGUNTA_POR_DEFECTO};

/// Verificador de los casos de prueba generados
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'q', long, default_value_t = PREGUNTA_POR_DEFECTO)]
    pregunta: IdPregunta,

    /// Verifica todas las preguntas del directorio base, ignorando `--pregunta`
    #[arg(short, long, default_value_t = false)]
    todas: bool,

    #[arg(short, long, default_value = DIR_PREGUNTAS)]
    dir_base: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Formato::Json)]
    formato: Formato,
}

/// Verifica los casos leidos de una pregunta, imprimiendo el resultado.
/// Devuelve la cantidad de fallas: los casos incorrectos, mas uno si la
/// lista esta vacia o sus ids no son "1".."N".
fn reportar(dir: &Path, origen: &str, casos: &[CasoDePrueba]) -> usize {
    let mut fallas = 0;
    if let Err(e) = lector::verificar_ids(casos) {
        eprintln!(
            "{} ({}): la secuencia de casos es invalida: {:?}",
            dir.display().to_string().red(),
            origen,
            e
        );
        fallas += 1;
    }

    let incorrectos = lector::verificar_casos(casos);
    if incorrectos.is_empty() {
        if fallas == 0 {
            println!(
                "{} ({}): {} casos correctos",
                dir.display().to_string().green(),
                origen,
                casos.len().to_string().blue()
            );
        }
    } else {
        for caso in casos.iter().filter(|c| incorrectos.iter().any(|id| id == c.get_id())) {
            eprintln!("{} ({}): {} es incorrecto", dir.display(), origen, caso);
        }
        eprintln!(
            "{} ({}): {} de {} casos incorrectos",
            dir.display().to_string().red(),
            origen,
            incorrectos.len().to_string().red(),
            casos.len()
        );
    }
    fallas + incorrectos.len()
}

/// Lee y verifica una pregunta en el formato dado
fn verificar_pregunta(dir: &Path, formato: Formato) -> Result<usize, ErrorDuranteParseo> {
    let mut fallas = 0;
    if formato.incluye_json() {
        let casos = lector::leer_tests_json(dir)?;
        fallas += reportar(dir, "json", &casos);
    }
    if formato.incluye_txt() {
        let casos = lector::leer_entradas_salidas(dir)?;
        fallas += reportar(dir, "txt", &casos);
    }
    Ok(fallas)
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let preguntas = if args.todas {
        lector::listar_preguntas(&args.dir_base)?
    } else {
        vec![dir_pregunta(&args.dir_base, args.pregunta)]
    };

    let mut fallas = 0;
    for dir in preguntas {
        println!("Verificando {}", dir.display().to_string().blue());
        fallas += verificar_pregunta(&dir, args.formato)?;
    }

    if fallas > 0 {
        return Err(Error::CasosInvalidos(fallas));
    }
    Ok(())
}
