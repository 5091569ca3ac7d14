//! atmlib: перенос записей AndroMoney в CSV импорта Moze

pub mod error;
pub mod model;
pub mod traits;
pub mod convert;

pub mod formats {
    pub mod andromoney;
    pub mod moze;
}
