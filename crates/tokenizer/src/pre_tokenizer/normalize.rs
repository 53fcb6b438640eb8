//! Unicode normalization and case folding.
//!
//! Tokens are compared by normalized form: text is brought to a Unicode
//! normalization form and lowercased using the language's case conventions
//! before it is split or looked up.

use unicode_normalization::UnicodeNormalization;

/// Normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    /// Canonical composition
    #[default]
    NFC,
    /// Canonical decomposition
    NFD,
    /// Compatibility composition
    NFKC,
    /// Compatibility decomposition
    NFKD,
    /// No normalization
    None,
}

/// How uppercase letters are folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMapping {
    /// Unicode default lowercasing
    #[default]
    Default,
    /// Turkish and Azerbaijani: dotless I lowers to `ı`, dotted İ to `i`
    Turkic,
    /// Keep case as-is
    Preserve,
}

/// Unicode normalizer with case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalizer {
    /// Normalization form to apply
    form: NormalizationForm,
    /// Case folding to apply
    case: CaseMapping,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm, case: CaseMapping) -> Self {
        Self { form, case }
    }

    /// Create an NFC normalizer with default lowercasing.
    pub fn nfc() -> Self {
        Self::new(NormalizationForm::NFC, CaseMapping::Default)
    }

    /// Normalize text.
    ///
    /// Applies the form, folds case, and reapplies the form if folding
    /// changed anything.
    pub fn normalize(&self, text: &str) -> String {
        let composed = self.apply_form(text);
        let folded = self.fold_case(&composed);
        if folded == composed {
            return folded;
        }
        self.apply_form(&folded)
    }

    fn apply_form(&self, text: &str) -> String {
        match self.form {
            NormalizationForm::NFC => text.nfc().collect(),
            NormalizationForm::NFD => text.nfd().collect(),
            NormalizationForm::NFKC => text.nfkc().collect(),
            NormalizationForm::NFKD => text.nfkd().collect(),
            NormalizationForm::None => text.to_string(),
        }
    }

    fn fold_case(&self, text: &str) -> String {
        match self.case {
            CaseMapping::Default => text.to_lowercase(),
            CaseMapping::Turkic => {
                let mut out = String::with_capacity(text.len());
                for c in text.chars() {
                    match c {
                        'I' => out.push('ı'),
                        'İ' => out.push('i'),
                        _ => out.extend(c.to_lowercase()),
                    }
                }
                out
            }
            CaseMapping::Preserve => text.to_string(),
        }
    }
}
