//! Core value types used by railhud state.

/// Display severity attached to a status cell.
///
/// Producers tag each field with a severity instead of baking color markers
/// into the text; the renderer maps severities onto theme colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    /// Ordinary informational field.
    #[default]
    Normal,
    /// Highlighted detail (cyan in the classic HUD).
    Info,
    /// Needs attention soon (yellow).
    Caution,
    /// Immediate problem (red).
    Critical,
}

/// Legacy three-character color sentinels and the severities they map to.
///
/// Older producers append one of these to the final tab-delimited field; the
/// ingestion layer strips it and applies the severity to the whole line.
pub const LEGACY_SENTINELS: [(&str, Severity); 3] = [
    ("!!!", Severity::Critical),
    ("???", Severity::Caution),
    ("$$$", Severity::Info),
];

impl Severity {
    /// Look up the severity for a legacy sentinel token.
    ///
    /// Inputs: `token` candidate three-character suffix.
    ///
    /// Output: `Some(Severity)` for a known sentinel; `None` otherwise.
    pub fn from_sentinel(token: &str) -> Option<Self> {
        LEGACY_SENTINELS
            .iter()
            .find(|(s, _)| *s == token)
            .map(|(_, sev)| *sev)
    }
}

/// One formatted cell of a status table: display text plus severity.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusCell {
    /// Display text for the cell.
    pub text: String,
    /// Severity used by the renderer to pick a color.
    pub severity: Severity,
}

impl StatusCell {
    /// Build a cell with [`Severity::Normal`].
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Normal,
        }
    }

    /// Build a cell with an explicit severity.
    pub fn with_severity(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// One logical status record: an ordered sequence of cells for one entity
/// (a car, a locomotive, a train).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusLine {
    /// Ordered cells; cell 0 conventionally identifies the entity.
    pub cells: Vec<StatusCell>,
}

impl StatusLine {
    /// Empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line of plain cells from string fields.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: fields.into_iter().map(StatusCell::plain).collect(),
        }
    }

    /// Append a cell and return `self` for chaining while building rows.
    pub fn push(mut self, cell: StatusCell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Number of cells in the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the line has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// HUD pages carried over from the classic HUD window set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HudTab {
    /// Train-level summary: speed, gradient, direction, time.
    Common,
    /// Per-car consist overview.
    Consist,
    /// Per-locomotive detail with its own sub-paging.
    Locomotive,
    /// Per-car brake status (air and vacuum headers differ).
    Brake,
    /// Dispatcher / signalling information.
    Dispatcher,
}

impl HudTab {
    /// All tabs in display order.
    pub const ALL: [HudTab; 5] = [
        HudTab::Common,
        HudTab::Consist,
        HudTab::Locomotive,
        HudTab::Brake,
        HudTab::Dispatcher,
    ];

    /// Short title used in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            HudTab::Common => "Common",
            HudTab::Consist => "Consist",
            HudTab::Locomotive => "Locomotive",
            HudTab::Brake => "Brake",
            HudTab::Dispatcher => "Dispatcher",
        }
    }

    /// Index of the tab within [`HudTab::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab for a persisted index, clamped into range.
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i.min(Self::ALL.len() - 1)]
    }

    /// Next tab, wrapping at the end (tab cycling is the one navigation
    /// command that wraps; page navigation never does).
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    /// Previous tab, wrapping at the start.
    pub fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::from_index((self.index() + n - 1) % n)
    }
}

/// Locomotive kind capability tag, queried once instead of repeated runtime
/// type tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LocoKind {
    /// Steam locomotive (boiler pressure, cutoff).
    Steam,
    /// Diesel-electric (engine RPM, fuel).
    Diesel,
    /// Electric (pantograph, line voltage).
    Electric,
}

impl LocoKind {
    /// Short label for table rows.
    pub fn label(self) -> &'static str {
        match self {
            LocoKind::Steam => "Steam",
            LocoKind::Diesel => "Diesel",
            LocoKind::Electric => "Electric",
        }
    }
}

/// Brake system fitted to a car; selects which brake-table header applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BrakeSystem {
    /// Automatic air brake (pressures in psi).
    Air,
    /// Vacuum brake (vacuum in inHg).
    Vacuum,
}

/// Persisted view state: the active tab and the last tab that produced
/// non-blank content. The pagination cursor itself is never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavedView {
    /// Index of the active HUD tab within [`HudTab::ALL`].
    pub active_tab: usize,
    /// Index of the last tab that rendered non-blank content.
    pub last_text_tab: usize,
}

impl Default for SavedView {
    fn default() -> Self {
        Self {
            active_tab: 0,
            last_text_tab: 0,
        }
    }
}
