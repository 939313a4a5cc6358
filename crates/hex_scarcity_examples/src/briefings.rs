//! Canned analysis briefings, each carrying the scarcity its board is shown at.
use hex_scarcity::prelude::{Result, Scarcity};

/// One published briefing and its simulation preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Briefing {
    pub title: &'static str,
    pub date: &'static str,
    pub tag: &'static str,
    pub summary: &'static str,
    /// Scarcity percentage loaded with this briefing.
    pub scarcity_setting: u8,
    pub link: &'static str,
}

impl Briefing {
    pub fn scarcity(&self) -> Result<Scarcity> {
        Scarcity::try_from(self.scarcity_setting)
    }

    /// `TAG | date` header line.
    pub fn header(&self) -> String {
        format!("{} | {}", self.tag.to_uppercase(), self.date)
    }

    pub fn find(title: &str) -> Option<&'static Briefing> {
        BRIEFINGS.iter().find(|b| b.title.eq_ignore_ascii_case(title))
    }
}

pub const BRIEFINGS: [Briefing; 2] = [
    Briefing {
        title: "The Silicon Blockade",
        date: "2026-01-02",
        tag: "Tech War",
        summary: "Analyzing the impact of Ore (Rare Earth) restrictions on global chip supply chains.",
        scarcity_setting: 65,
        link: "https://substack.com",
    },
    Briefing {
        title: "Wheat as a Weapon",
        date: "2025-12-24",
        tag: "Agriculture",
        summary: "When the 'Breadbasket' hexes fail, political instability follows. A historical comparison.",
        scarcity_setting: 30,
        link: "https://substack.com",
    },
];
