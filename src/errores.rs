//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion

use std::io;

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug)]
pub enum Error {
    ErrorDeGeneracion(ErrorGeneracion),
    ErrorDeParseo(ErrorDuranteParseo),
    CasosInvalidos(usize),
}

impl From<ErrorGeneracion> for Error {
    fn from(err: ErrorGeneracion) -> Self {
        Error::ErrorDeGeneracion(err)
    }
}

impl From<ErrorDuranteParseo> for Error {
    fn from(err: ErrorDuranteParseo) -> Self {
        Error::ErrorDeParseo(err)
    }
}

/// Enumerativo que define todos los errores que pueden darse
/// al generar los archivos de casos
#[derive(Debug)]
pub enum ErrorGeneracion {
    RangoInvalido,
    CantidadCero,
    NoSePudoEscribir(io::ErrorKind),
    NoSePudoSerializar,
}

impl From<io::Error> for ErrorGeneracion {
    fn from(err: io::Error) -> Self {
        ErrorGeneracion::NoSePudoEscribir(err.kind())
    }
}

impl From<serde_json::Error> for ErrorGeneracion {
    fn from(err: serde_json::Error) -> Self {
        match err.io_error_kind() {
            Some(kind) => ErrorGeneracion::NoSePudoEscribir(kind),
            None => ErrorGeneracion::NoSePudoSerializar,
        }
    }
}

/// Enumerativo que define los problemas de secuencia que puede tener
/// la lista de casos de una pregunta
#[derive(Debug)]
pub enum ErrorVerificacion {
    SinCasos,
    IdInesperado { esperado: String, encontrado: String },
}

/// Enumerativo que define todos los errores que pueden darse
/// en el parseo de los archivos de casos
#[derive(Debug)]
pub enum ErrorDuranteParseo {
    NoSePudoAbrirArchivo(io::ErrorKind),
    FormatoArchivoInvalido,
}

impl From<io::Error> for ErrorDuranteParseo {
    fn from(err: io::Error) -> Self {
        ErrorDuranteParseo::NoSePudoAbrirArchivo(err.kind())
    }
}

impl From<serde_json::Error> for ErrorDuranteParseo {
    fn from(err: serde_json::Error) -> Self {
        match err.io_error_kind() {
            Some(kind) => ErrorDuranteParseo::NoSePudoAbrirArchivo(kind),
            None => ErrorDuranteParseo::FormatoArchivoInvalido,
        }
    }
}
