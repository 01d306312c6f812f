use super::builder::DirectoryAccumulator;
use super::directory::{AddressDirectory, DirectorySource};

/// Built-in governorates and areas used when the dataset is unavailable
const BUILTIN_AREAS: &[(&str, &[&str])] = &[
    (
        "Sharqia",
        &["Zagazig", "Minya El Qamh", "Mashtol Al Souq", "Hihya", "Abu Hammad", "Bilbeis"],
    ),
    (
        "Cairo",
        &["Downtown", "Nasr City", "Maadi", "Helwan", "Shorouk", "Ain Shams", "El Marg", "New Cairo"],
    ),
    (
        "Giza",
        &["Faisal", "Haram", "Dokki", "Mohandisen", "Imbaba", "Bolak Al Dakrour"],
    ),
    (
        "Alexandria",
        &["Al-agamy", "Sidi Gaber", "El-Raml", "Montaza", "Al Mamurah", "Abu Qir", "Smouha", "Miami"],
    ),
    ("Dakahlia", &["El Mansoura", "Mit Ghamr", "Talkha"]),
];

pub fn builtin_directory() -> AddressDirectory {
    let mut acc = DirectoryAccumulator::default();
    for (governorate, areas) in BUILTIN_AREAS {
        for area in *areas {
            acc.add(governorate, area);
        }
    }
    acc.finish(DirectorySource::BuiltIn)
}
