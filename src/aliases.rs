//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type IdPregunta = u32;
pub type IdCaso = u16;
pub type CantidadCasos = u16;
pub type Entrada = i32;
pub type Salida = i64;
pub type RangoEntrada = (Entrada, Entrada);
