//! Static keyword lexicon.
//!
//! Three tables keyed by pole letters: strength keywords, vulnerability
//! keywords, and the named contradiction patterns the detector checks.
//! All tables are compiled-in configuration: no runtime registration,
//! no mutation, no learning.

use crate::domain::questionnaire::Pole;
use crate::domain::scoring::TypeCode;

/// A named contradiction between a pole and journal evidence.
///
/// A pattern fires only for types containing its pole, and only when at
/// least one trigger keyword appears in the journal corpus.
#[derive(Debug, Clone, Copy)]
pub struct ContradictionPattern {
    pub name: &'static str,
    pub pole: Pole,
    pub keywords: &'static [&'static str],
    pub insight: &'static str,
    pub recommendation: &'static str,
}

/// The contradiction patterns, in the fixed order insights are emitted.
pub const CONTRADICTION_PATTERNS: &[ContradictionPattern] = &[
    ContradictionPattern {
        name: "P_planning_stress",
        pole: Pole::P,
        keywords: &["didn't go as planned", "schedule fell apart", "frustrated"],
        insight: "Flexibility is your strength, yet you seem to carry an \
                  unspoken expectation that things go to plan.",
        recommendation: "Try setting a direction rather than a plan, so your \
                         natural adaptability keeps working for you.",
    },
    ContradictionPattern {
        name: "J_spontaneous_desire",
        pole: Pole::J,
        keywords: &["more freedom", "tied down", "feel boxed in"],
        insight: "You favor order, but a desire for spontaneity shows \
                  through as well.",
        recommendation: "Deliberately schedule unplanned slack time inside \
                         your plans.",
    },
    ContradictionPattern {
        name: "T_emotional_struggle",
        pole: Pole::T,
        keywords: &["got emotional", "couldn't hold back my feelings", "anger"],
        insight: "You value staying logical, but emotions are a meaningful \
                  source of information too.",
        recommendation: "Try observing your emotions as data points to \
                         understand yourself more deeply.",
    },
    ContradictionPattern {
        name: "F_logic_frustration",
        pole: Pole::F,
        keywords: &["can't think logically", "can't be rational", "inefficient"],
        insight: "While empathy comes first for you, there seems to be a \
                  longing to reason things out logically.",
        recommendation: "Frame it as logic in service of helping people, and \
                         your analytical side gets room to work.",
    },
    ContradictionPattern {
        name: "E_social_exhaustion",
        pole: Pole::E,
        keywords: &["drained by people", "want to be alone", "need some quiet"],
        insight: "Even the sociable need time to turn inward.",
        recommendation: "Take guilt-free alone time and treat it as \
                         recharging.",
    },
    ContradictionPattern {
        name: "I_connection_desire",
        pole: Pole::I,
        keywords: &["wished I had talked more", "want to connect", "lonely"],
        insight: "Being introverted and wanting connection with people are \
                  entirely compatible.",
        recommendation: "Make space for deep conversation in small groups, on \
                         purpose.",
    },
];

/// Strength keywords associated with each pole.
pub fn strengths_for_pole(pole: Pole) -> &'static [&'static str] {
    match pole {
        Pole::E => &[
            "communication",
            "teamwork",
            "sociability",
            "initiative",
            "outreach",
        ],
        Pole::I => &[
            "concentration",
            "deep thinking",
            "independence",
            "carefulness",
            "observation",
        ],
        Pole::S => &[
            "realism",
            "detail",
            "practicality",
            "experience",
            "stability",
        ],
        Pole::N => &[
            "creativity",
            "vision",
            "possibility",
            "innovation",
            "intuition",
        ],
        Pole::T => &[
            "logic",
            "analysis",
            "efficiency",
            "objectivity",
            "problem solving",
        ],
        Pole::F => &[
            "empathy",
            "harmony",
            "relationships",
            "values",
            "consideration",
        ],
        Pole::J => &[
            "planning",
            "organization",
            "deadlines",
            "decisiveness",
            "order",
        ],
        Pole::P => &[
            "flexibility",
            "adaptability",
            "improvisation",
            "exploration",
            "openness",
        ],
    }
}

/// Stress and struggle keywords associated with each pole.
pub fn vulnerabilities_for_pole(pole: Pole) -> &'static [&'static str] {
    match pole {
        Pole::E => &[
            "worn out",
            "want to be alone",
            "need some quiet",
            "too noisy",
        ],
        Pole::I => &[
            "wanted to talk more",
            "lonely",
            "felt invisible",
            "couldn't speak up",
        ],
        Pole::S => &[
            "no clear outlook",
            "can't keep up with change",
            "too abstract",
        ],
        Pole::N => &["nitpicky", "bored", "routine", "too down to earth"],
        Pole::T => &[
            "got emotional",
            "misunderstood",
            "illogical",
            "swept up in feelings",
        ],
        Pole::F => &[
            "cold",
            "too calculating",
            "was criticized",
            "relationships are draining",
        ],
        Pole::J => &[
            "schedule fell apart",
            "didn't go as planned",
            "uncertain",
            "can't decide",
        ],
        Pole::P => &[
            "deadline",
            "pressure",
            "feeling chased",
            "forced to decide",
        ],
    }
}

/// Collects the strength keywords for all four letters of a type code.
pub fn strengths_for(type_code: &TypeCode) -> Vec<&'static str> {
    type_code
        .poles()
        .iter()
        .flat_map(|pole| strengths_for_pole(*pole).iter().copied())
        .collect()
}

/// Collects the vulnerability keywords for all four letters of a type code.
pub fn challenges_for(type_code: &TypeCode) -> Vec<&'static str> {
    type_code
        .poles()
        .iter()
        .flat_map(|pole| vulnerabilities_for_pole(*pole).iter().copied())
        .collect()
}
