//! Default vocabularies for Venezuelan gazette scanning.
//!
//! These lists only seed [`crate::models::config::ScanConfig::default`];
//! every one of them can be replaced from a config file.

/// Identity-document letters: V (venezolano), E (extranjero), J (jurídico),
/// G (gobierno), P (pasaporte).
pub const IDENTITY_LETTERS: &str = "VEJGP";

/// Words that must appear near an identity-shaped token for it to count.
pub const IDENTITY_KEYWORDS: &[&str] = &[
    "ciudadano",
    "ciudadana",
    "ciudadanos",
    "ciudadanas",
    "titular",
    "cédula",
    "cedula",
    "identidad",
    "C.I.",
    "C.I",
    "representante",
    "representada",
    "representado",
    "portador",
    "portadora",
    "venezolano",
    "venezolana",
    "extranjero",
    "extranjera",
    "nacionalidad",
    "pasaporte",
    "RIF",
    "R.I.F.",
    "registro de información fiscal",
    "domiciliado",
    "domiciliada",
    "mayor de edad",
    "sociedad mercantil",
    "firma personal",
    "denominada",
    "apoderado",
    "apoderada",
    "designado",
    "designada",
    "nombrado",
    "nombrada",
    "funcionario",
    "funcionaria",
];

/// Capitalized boilerplate that must never be mistaken for a person name.
pub const NAME_BLACKLIST: &[&str] = &[
    // function words that OCR often renders in capitals
    "el", "en", "al", "un", "una", "por", "con", "para", "que", "como", "sus", "no", "si", "sí",
    // state and gazette vocabulary
    "gaceta", "oficial", "república", "republica", "bolivariana", "venezuela", "ministerio",
    "viceministerio", "nacional", "artículo", "articulo", "decreto", "ley", "resolución",
    "resolucion", "providencia", "número", "numero", "poder", "popular", "presidente",
    "presidenta", "vicepresidente", "vicepresidenta", "ministro", "ministra", "viceministro",
    "viceministra", "director", "directora", "secretario", "secretaria", "gobierno",
    "administración", "administracion", "ejecutivo", "ejecutiva", "judicial", "legislativo",
    "despacho", "dirección", "direccion", "superintendencia", "consejo", "comisión", "comision",
    "junta", "tribunal", "sala", "imprenta", "caracas", "distrito", "capital", "estado",
    "municipio", "patria", "dios", "federación", "federacion",
    // identity and civil registry vocabulary
    "titular", "identificación", "identificacion", "cédula", "cedula", "identidad", "rif",
    "nombre", "apellido", "ciudadano", "ciudadana", "solicitante", "firma", "fecha", "página",
    "pagina", "oficina", "registro", "civil", "domicilio", "nacionalidad", "venezolano",
    "venezolana", "extranjero", "extranjera", "profesión", "profesion", "naturalización",
    "naturalizacion", "orden", "publicación", "publicacion", "asunto", "referencia",
    "documento", "expediente", "certificado", "notaría", "notaria", "carácter", "caracter",
    "cargo",
    // legal verbs and qualifiers
    "suscrito", "firmado", "presente", "siguiente", "primero", "segundo", "tercero", "aprueba",
    "dicta", "publica", "notifica", "certifica", "consta", "mediante", "conforme", "designado",
    "designada", "nombrado", "nombrada", "suplente", "encargado", "encargada",
    // closing formulas and headings of decrees
    "comuníquese", "comuniquese", "publíquese", "publiquese", "notifíquese", "notifiquese",
    "cúmplase", "cumplase", "dada", "dado", "capítulo", "capitulo", "título", "titulo",
    "sección", "seccion", "considerando", "resuelve", "decreta", "disposición", "disposiciones",
    "transitoria", "transitorias",
    // health and institutions
    "salud", "hospital", "ambulatorio", "instituto", "servicio", "autónomo", "autonomo",
    "fundación", "fundacion", "universidad", "corporación", "corporacion", "empresa",
    "compañía", "compania", "sociedad",
    // military vocabulary
    "general", "mayor", "almirante", "vicealmirante", "contralmirante", "comandante", "coronel",
    "teniente", "capitán", "capitan", "sargento", "división", "division", "brigada", "fuerza",
    "fuerzas", "armada", "armadas", "defensa", "fanb", "zodi", "ascenso", "rango", "grado",
];

/// Lowercase particles allowed inside a person name.
pub const NAME_CONNECTORS: &[&str] = &["de", "del", "la", "las", "los", "y"];

/// Military ranks, units and institutions reported as mentions.
pub const MILITARY_TERMS: &[&str] = &[
    "Fuerza Armada Nacional Bolivariana",
    "Guardia Nacional Bolivariana",
    "Aviación Militar Bolivariana",
    "Comando Estratégico Operacional",
    "Ejército Bolivariano",
    "Armada Bolivariana",
    "Milicia Bolivariana",
    "General en Jefe",
    "Mayor General",
    "General de División",
    "General de Brigada",
    "Almirante en Jefe",
    "Teniente Coronel",
    "Capitán de Navío",
    "Capitán de Fragata",
    "Capitán de Corbeta",
    "Teniente de Navío",
    "Teniente de Fragata",
    "Alférez de Navío",
    "Primer Teniente",
    "Sargento Mayor",
    "Vicealmirante",
    "Contralmirante",
    "Almirante",
    "Coronel",
    "Comandante",
    "Capitán",
    "Teniente",
    "Sargento",
    "CEOFANB",
    "FANB",
    "GNB",
    "ZODI",
    "REDI",
    "militar",
    "militares",
    "castrense",
];

/// Ranks accepted at the head of a `rank NAME, C.I N° ..., Title` record.
pub const RANK_TITLE_RANKS: &[&str] = &[
    "General en Jefe",
    "Mayor General",
    "General de División",
    "General de Brigada",
    "Almirante en Jefe",
    "Almirante",
    "Vicealmirante",
    "Contralmirante",
    "Coronel",
    "Teniente Coronel",
    "Capitán de Navío",
    "Capitán de Fragata",
    "Capitán de Corbeta",
    "Teniente de Navío",
    "Teniente de Fragata",
    "Primer Teniente",
    "Teniente",
    "Capitán",
    "Sargento Mayor",
    "Mayor",
];

/// Single-word ranks used after "En relación a la ciudadana/o".
pub const CITIZEN_RANKS: &[&str] = &[
    "General",
    "Almirante",
    "Vicealmirante",
    "Contralmirante",
    "Coronel",
    "Comandante",
    "Capitán",
    "Teniente",
    "Mayor",
    "Sargento",
    "Alférez",
];

/// Convert a static vocabulary into owned strings.
pub fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
