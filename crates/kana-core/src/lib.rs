pub mod diacritic;
pub mod direct_kana;
pub mod romaji;
pub mod settings;
pub mod unicode;
