use std::sync::LazyLock;

use regex::Regex;

use super::types::Mode;

/// Prompt for a single Raven matrix photo.
pub const PROMPT_SIMPLE: &str = r#"RAVEN MATRIX EXPERT. Protocole OBLIGATOIRE :

1. PERCEPTION - Décris CHAQUE cellule [ligne,colonne] :
   - Formes présentes
   - Nombre d'éléments
   - Taille (petit/moyen/grand)
   - Remplissage (noir/blanc/gris/hachuré)
   - Orientation (angle)
   - Position dans la cellule

2. RÈGLES PAR LIGNE - Pour chaque ligne, teste :
   - Constante ? (attribut identique)
   - Progression ? (+1, +2, etc.)
   - Distribution de 3 ? (3 valeurs différentes)
   - Addition/Soustraction ? (C1+C2=C3)
   - XOR ? (éléments communs disparaissent)
   - AND/OR ? (superposition)
   - Rotation ? (angle constant)

3. RÈGLES PAR COLONNE - Mêmes tests verticalement

4. PRÉDICTION - Combine règles lignes + colonnes pour prédire [3,3]

5. RÉPONSE FINALE - Compare avec les options, choisis la meilleure

RÈGLES CRITIQUES :
- TOUJOURS décrire AVANT de raisonner
- Plusieurs règles coexistent (une par attribut)
- Chaque attribut est INDÉPENDANT

FORMAT OUTPUT FINAL (dernière ligne) :
"Question [numéro] réponse [lettre]"

Si vraiment pas sûr après analyse complète : "Pas sûr"
Si illisible : "Recommence""#;

/// Prompt for several photos, or when the professor's words were transcribed.
pub const PROMPT_COMPLEX: &str = r#"EXPERT EN RÉSOLUTION. Le prof parle peut-être.

Si c'est une MATRICE DE RAVEN :
1. Décris CHAQUE cellule (formes, nombre, taille, remplissage, orientation)
2. Trouve les règles par LIGNE (constante, progression, distribution, XOR, rotation...)
3. Trouve les règles par COLONNE
4. Prédit la cellule manquante
5. Compare avec les options

Si c'est une AUTRE QUESTION : réponds directement

FORMAT OUTPUT FINAL :
"Question [numéro] réponse [lettre]" ou réponse courte
Si pas sûr : "Pas sûr"
Si illisible : "Recommence""#;

static DATA_URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:image/\w+;base64,").expect("data url pattern"));

/// Build the text block sent after the images.
pub fn build_prompt(mode: Mode, transcription: Option<&str>) -> String {
    let mut prompt = match mode {
        Mode::Simple => PROMPT_SIMPLE,
        Mode::Complex => PROMPT_COMPLEX,
    }
    .to_string();

    if let Some(text) = transcription.filter(|t| !t.is_empty()) {
        prompt.push_str(&format!("\n\nLe professeur dit : \"{}\"", text));
    }

    prompt
}

/// Drop a leading `data:image/<type>;base64,` header, leaving raw base64.
pub fn strip_data_url(data: &str) -> &str {
    match DATA_URL_PREFIX.find(data) {
        Some(m) => &data[m.end()..],
        None => data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_prompt() {
        assert_eq!(build_prompt(Mode::Simple, None), PROMPT_SIMPLE);
    }

    #[test]
    fn test_complex_prompt_with_transcription() {
        let prompt = build_prompt(Mode::Complex, Some("la réponse est en bas"));
        assert!(prompt.starts_with(PROMPT_COMPLEX));
        assert!(prompt.ends_with("\n\nLe professeur dit : \"la réponse est en bas\""));
    }

    #[test]
    fn test_empty_transcription_not_appended() {
        assert_eq!(build_prompt(Mode::Complex, Some("")), PROMPT_COMPLEX);
    }

    #[test]
    fn test_prompts_ask_for_the_extracted_signals() {
        for prompt in [PROMPT_SIMPLE, PROMPT_COMPLEX] {
            assert!(prompt.contains("Question [numéro] réponse [lettre]"));
            assert!(prompt.contains("\"Pas sûr\""));
            assert!(prompt.ends_with("\"Recommence\""));
        }
    }

    #[test]
    fn test_strip_data_url() {
        assert_eq!(strip_data_url("data:image/jpeg;base64,/9j/4AAQ"), "/9j/4AAQ");
        assert_eq!(strip_data_url("data:image/png;base64,iVBOR"), "iVBOR");
    }

    #[test]
    fn test_strip_data_url_leaves_raw_base64() {
        assert_eq!(strip_data_url("/9j/4AAQ"), "/9j/4AAQ");
        assert_eq!(strip_data_url("xdata:image/png;base64,abc"), "xdata:image/png;base64,abc");
    }
}
