//! Genera los casos de prueba de una pregunta en la carpeta `Questions/{id}`,
//! como un archivo `tests.json`, como pares de archivos de entrada y salida, o
//! de ambas formas.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};

use qgen::aliases::{CantidadCasos, Entrada, IdPregunta};
use qgen::errores::Error;
use qgen::generators::{casos_gen, json_gen, txt_gen};
use qgen::{
    dir_pregunta, Formato, CANTIDAD_CASOS, DIR_PREGUNTAS, PREGUNTA_POR_DEFECTO, RANGO_ENTRADA,
};

/// Generador de casos de prueba para el problema "Double and Add/Sub"
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Id de la pregunta, que determina la carpeta de salida
    #[arg(short = 'q', long, default_value_t = PREGUNTA_POR_DEFECTO)]
    pregunta: IdPregunta,

    /// Directorio base de las preguntas
    #[arg(short, long, default_value = DIR_PREGUNTAS)]
    dir_base: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Formato::Json)]
    formato: Formato,

    /// Cantidad de casos a generar
    #[arg(short = 'n', long, default_value_t = CANTIDAD_CASOS)]
    cantidad: CantidadCasos,

    /// Minimo valor de entrada (inclusivo)
    #[arg(long, default_value_t = RANGO_ENTRADA.0, allow_hyphen_values = true)]
    min: Entrada,

    /// Maximo valor de entrada (inclusivo)
    #[arg(long, default_value_t = RANGO_ENTRADA.1, allow_hyphen_values = true)]
    max: Entrada,

    /// Semilla para obtener siempre los mismos casos
    #[arg(short, long)]
    semilla: Option<u64>,

    /// Escribe tambien el enunciado en `question.txt`
    #[arg(short, long, default_value_t = false)]
    enunciado: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let rango = (args.min, args.max);

    let casos = match args.semilla {
        Some(semilla) => {
            let mut rng = StdRng::seed_from_u64(semilla);
            casos_gen::generar_casos_aleatorios(&mut rng, rango, args.cantidad)
        }
        None => casos_gen::generar_casos_aleatorios(&mut rand::thread_rng(), rango, args.cantidad),
    }?;

    let dir = dir_pregunta(&args.dir_base, args.pregunta);

    if args.formato.incluye_json() {
        let ruta = json_gen::generar_arch_tests_json(&dir, &casos)?;
        println!(
            "Se generaron {} casos de prueba en {}",
            casos.len().to_string().blue(),
            ruta.display().to_string().green()
        );
    }

    if args.formato.incluye_txt() {
        let ruta = txt_gen::generar_archs_entrada_salida(&dir, &casos)?;
        println!(
            "Se generaron {} pares de entrada/salida en {}",
            casos.len().to_string().blue(),
            ruta.display().to_string().green()
        );
    }

    if args.enunciado {
        let ruta = txt_gen::generar_arch_enunciado(&dir)?;
        println!("Enunciado escrito en {}", ruta.display().to_string().green());
    }

    Ok(())
}
