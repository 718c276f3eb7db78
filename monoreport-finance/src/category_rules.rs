//! Deterministic category rules mapping a merchant category code plus the
//! statement description to a [`Category`].
//!
//! Rules are plain data, evaluated top to bottom; the first hit wins and
//! anything left over is [`Category::Other`]. Keyword matching lowercases the
//! description with Unicode case folding (`str::to_lowercase`), so Cyrillic
//! keywords behave the same as Latin ones regardless of locale.
//!
//! The default table encodes one person's spending habits. Treat it as sample
//! data and pass your own table to [`CategoryRules::new`] if it doesn't fit.

use monoreport_core::{Category, Transaction};

/// How a rule looks at the lowercased description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch {
    /// Any text
    Any,
    /// Lowercase substring anywhere in the text
    Contains(&'static str),
    /// One of these lowercase words, delimited by non-alphabetic characters
    Word(&'static [&'static str]),
}

impl TextMatch {
    fn matches(&self, description_lower: &str) -> bool {
        match self {
            TextMatch::Any => true,
            TextMatch::Contains(kw) => description_lower.contains(kw),
            TextMatch::Word(forms) => description_lower
                .split(|c: char| !c.is_alphabetic())
                .any(|word| forms.contains(&word)),
        }
    }

    #[cfg(test)]
    fn needles(&self) -> &[&'static str] {
        match self {
            TextMatch::Any => &[],
            TextMatch::Contains(kw) => std::slice::from_ref(kw),
            TextMatch::Word(forms) => forms,
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// MCCs this rule applies to
    pub codes: &'static [u16],
    pub text: TextMatch,
    pub category: Category,
}

impl Rule {
    fn matches(&self, mcc: u16, description_lower: &str) -> bool {
        self.codes.contains(&mcc) && self.text.matches(description_lower)
    }
}

const fn by_code(codes: &'static [u16], category: Category) -> Rule {
    Rule {
        codes,
        text: TextMatch::Any,
        category,
    }
}

const fn by_keyword(codes: &'static [u16], keyword: &'static str, category: Category) -> Rule {
    Rule {
        codes,
        text: TextMatch::Contains(keyword),
        category,
    }
}

const fn by_word(
    codes: &'static [u16],
    forms: &'static [&'static str],
    category: Category,
) -> Rule {
    Rule {
        codes,
        text: TextMatch::Word(forms),
        category,
    }
}

const EATING_OUT: &[u16] = &[5812, 5814, 5399];
const WIRE_TRANSFER: &[u16] = &[4829];
/// Declensions of "мама"
const MOM: &[&str] = &["мама", "мами", "мамі", "маму", "мамо", "мамою"];

pub const DEFAULT_RULES: &[Rule] = &[
    by_code(&[7841], Category::Fun),
    by_code(&[4121], Category::TransportTaxi),
    by_code(&[5411], Category::Food),
    by_keyword(EATING_OUT, "coffee", Category::Coffee),
    by_code(EATING_OUT, Category::Restaurants),
    by_code(&[5912], Category::Selfcare),
    by_code(&[7399], Category::OpenCars),
    by_code(&[5941, 5946, 5651, 5699, 5732], Category::Clothes),
    by_code(&[5541], Category::CarGas),
    by_code(&[4812, 4814], Category::UtilityMobile),
    by_word(WIRE_TRANSFER, MOM, Category::MomFather),
    by_keyword(WIRE_TRANSFER, "megogo", Category::Salary),
    by_keyword(WIRE_TRANSFER, "поповнення", Category::Charity),
    by_code(WIRE_TRANSFER, Category::Other),
    by_code(&[7538, 5533], Category::CarFixes),
    by_code(&[5995], Category::Cat),
    by_code(&[2741], Category::Subscriptions),
];

/// An ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRules<'a> {
    rules: &'a [Rule],
}

impl Default for CategoryRules<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}

impl<'a> CategoryRules<'a> {
    pub fn new(rules: &'a [Rule]) -> Self {
        Self { rules }
    }

    /// Total: never fails, falls back to [`Category::Other`].
    pub fn classify(&self, mcc: u16, description: &str) -> Category {
        let desc = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(mcc, &desc))
            .map(|rule| rule.category)
            .unwrap_or(Category::Other)
    }

    pub fn classify_transaction(&self, txn: &Transaction) -> Category {
        self.classify(txn.mcc, &txn.description)
    }
}

/// Classify with [`DEFAULT_RULES`].
pub fn classify(mcc: u16, description: &str) -> Category {
    CategoryRules::default().classify(mcc, description)
}
