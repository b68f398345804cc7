//! The static coaching-arm catalog, selection modes, and KPI mapping.
//!
//! Arms are compile-time data: six entries, never created or destroyed at
//! runtime. Each arm is tagged with the incentive category it pushes on,
//! and a mode can boost specific arms during selection (see
//! [`mode_boost`]).

/// Incentive category an arm pushes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ArmKind {
    /// Total output / pace.
    TScore,
    /// Quality / contribution.
    QScore,
    /// Learning / skill uptake.
    LuScore,
    /// Originality / innovation.
    OScore,
    /// Psychological safety / team climate.
    PsychSafety,
}

impl ArmKind {
    /// Stable wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ArmKind::TScore => "T_SCORE",
            ArmKind::QScore => "Q_SCORE",
            ArmKind::LuScore => "LU_SCORE",
            ArmKind::OScore => "O_SCORE",
            ArmKind::PsychSafety => "PSYCH_SAFETY",
        }
    }

    /// Short hint naming the LUQO axis this category leans on.
    pub fn luqo_hint(self) -> &'static str {
        match self {
            ArmKind::TScore => "T",
            ArmKind::QScore => "Q",
            ArmKind::LuScore => "LU",
            ArmKind::OScore => "O",
            ArmKind::PsychSafety => "SAFETY",
        }
    }
}

/// One candidate coaching focus in the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Arm {
    /// Unique id, stable across releases.
    pub id: &'static str,
    /// Incentive category.
    pub kind: ArmKind,
    /// Short human label.
    pub focus: &'static str,
    /// One-sentence explanation shown to the worker.
    pub desc: &'static str,
}

impl Arm {
    /// Deterministic prompt text for the downstream text-completion
    /// service. Pure formatting, no randomness.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are a coaching assistant for a construction crew. \
             Today's focus is \"{}\" ({}). {} \
             Reply with two concrete, encouraging sentences the crew lead \
             can say verbatim.",
            self.focus,
            self.kind.as_str(),
            self.desc,
        )
    }
}

/// The fixed six-arm catalog, in canonical order.
pub const ARM_CATALOG: [Arm; 6] = [
    Arm {
        id: "Arm_Speed",
        kind: ArmKind::TScore,
        focus: "Beat yesterday's pace",
        desc: "Set a concrete time target for today's main task and track it.",
    },
    Arm {
        id: "Arm_Quality",
        kind: ArmKind::QScore,
        focus: "Zero-rework day",
        desc: "Slow down on the finish work and aim for a day with no punch-list items.",
    },
    Arm {
        id: "Arm_Share",
        kind: ArmKind::LuScore,
        focus: "Teach one trick",
        desc: "Show a teammate one technique you picked up recently; teaching locks it in.",
    },
    Arm {
        id: "Arm_Innovate",
        kind: ArmKind::OScore,
        focus: "Try a new method",
        desc: "Pick one routine task and try a different approach, jig, or tool order.",
    },
    Arm {
        id: "Arm_Support",
        kind: ArmKind::PsychSafety,
        focus: "Back someone up",
        desc: "Spend fifteen minutes helping whoever is furthest behind today.",
    },
    Arm {
        id: "Arm_Dialog",
        kind: ArmKind::PsychSafety,
        focus: "Start the hard conversation",
        desc: "Raise one thing that slowed the crew down this week and talk it through.",
    },
];

/// Coarse selection mode biasing which arms get boosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Mode {
    Earn,
    Learn,
    Team,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Earn, Mode::Learn, Mode::Team];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Earn => "EARN",
            Mode::Learn => "LEARN",
            Mode::Team => "TEAM",
        }
    }
}

/// KPI bucket supplied by callers; maps onto a [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kpi {
    Quality,
    Growth,
    Innovation,
}

impl Kpi {
    /// The fixed KPI → mode mapping. This is an external contract:
    /// `quality→EARN`, `growth→LEARN`, `innovation→TEAM`.
    pub fn mode(self) -> Mode {
        match self {
            Kpi::Quality => Mode::Earn,
            Kpi::Growth => Mode::Learn,
            Kpi::Innovation => Mode::Team,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kpi::Quality => "quality",
            Kpi::Growth => "growth",
            Kpi::Innovation => "innovation",
        }
    }
}

/// Additive selection boost for `arm` under `mode`.
///
/// EARN favors pace/quality arms, TEAM favors the safety arms, LEARN
/// favors the innovate/share arms. Everything else gets 0.
#[must_use]
pub fn mode_boost(mode: Mode, arm: &Arm) -> f64 {
    match (mode, arm.id) {
        (Mode::Earn, "Arm_Speed") => 0.5,
        (Mode::Earn, "Arm_Quality") => 0.3,
        (Mode::Team, "Arm_Support") => 0.5,
        (Mode::Team, "Arm_Dialog") => 0.4,
        (Mode::Learn, "Arm_Innovate") => 0.5,
        (Mode::Learn, "Arm_Share") => 0.3,
        _ => 0.0,
    }
}
