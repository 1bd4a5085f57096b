//! Consist model and status producers for the HUD tables.
//!
//! The physics simulation is an external collaborator; this module carries
//! the structured state the viewer consumes: a [`Train`] of [`Car`]s with
//! capability tags (locomotive kind, brake system) and the per-tab table
//! builders. A demo consist plus JSON snapshot loading make the binary
//! runnable without a simulator, and a tick function perturbs demo values so
//! the HUD visibly refreshes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::hud::table::{self, StatusSource, StatusTable};
use crate::state::types::{BrakeSystem, HudTab, LocoKind, Severity, StatusCell, StatusLine};

/// What a car is: powered or unpowered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarKind {
    /// Unpowered wagon.
    Wagon,
    /// Locomotive of the given kind.
    Loco(LocoKind),
}

impl CarKind {
    /// Short label for table rows.
    pub fn label(self) -> &'static str {
        match self {
            CarKind::Wagon => "Wagon",
            CarKind::Loco(k) => k.label(),
        }
    }
}

/// One vehicle of the consist with its reported state.
///
/// Numeric fields are meaningful per kind (boiler pressure for steam, RPM
/// for diesel, line voltage for electric); irrelevant fields stay at their
/// defaults and are simply not shown.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Car {
    /// Reporting mark / running number.
    pub id: String,
    /// Powered or unpowered, and which traction kind.
    pub kind: CarKind,
    /// Fitted brake system; selects the brake-table header set.
    pub brake: BrakeSystem,
    /// Gross mass in tonnes.
    #[serde(default)]
    pub mass_t: f64,
    /// Load as a percentage of capacity.
    #[serde(default)]
    pub load_pct: f64,
    /// Brake cylinder pressure, psi (air brake).
    #[serde(default)]
    pub brake_cyl_psi: f64,
    /// Brake pipe pressure, psi (air brake).
    #[serde(default)]
    pub brake_pipe_psi: f64,
    /// Train pipe vacuum, inHg (vacuum brake).
    #[serde(default)]
    pub vacuum_inhg: f64,
    /// Main reservoir pressure, psi (locomotives).
    #[serde(default)]
    pub main_res_psi: f64,
    /// Throttle setting, percent (locomotives).
    #[serde(default)]
    pub throttle_pct: f64,
    /// Engine speed, RPM (diesel).
    #[serde(default)]
    pub rpm: f64,
    /// Boiler pressure, psi (steam).
    #[serde(default)]
    pub boiler_psi: f64,
    /// Line voltage, kV (electric).
    #[serde(default)]
    pub line_kv: f64,
    /// Coupler force, kN.
    #[serde(default)]
    pub coupler_kn: f64,
    /// Wheelslip indicator (locomotives).
    #[serde(default)]
    pub wheelslip: bool,
    /// Handbrake applied.
    #[serde(default)]
    pub handbrake: bool,
    /// Telemetry offline: the car reports no brake status at all.
    #[serde(default)]
    pub offline: bool,
}

impl Car {
    /// Unpowered wagon with nominal brake readings for its system.
    pub fn wagon(id: &str, brake: BrakeSystem) -> Self {
        Car {
            id: id.to_string(),
            kind: CarKind::Wagon,
            brake,
            mass_t: 80.0,
            load_pct: 0.0,
            brake_cyl_psi: 0.0,
            brake_pipe_psi: 90.0,
            vacuum_inhg: 21.0,
            main_res_psi: 0.0,
            throttle_pct: 0.0,
            rpm: 0.0,
            boiler_psi: 0.0,
            line_kv: 0.0,
            coupler_kn: 120.0,
            wheelslip: false,
            handbrake: false,
            offline: false,
        }
    }

    /// Locomotive of the given traction kind, air-braked, idling.
    pub fn loco(id: &str, kind: LocoKind) -> Self {
        Car {
            id: id.to_string(),
            kind: CarKind::Loco(kind),
            brake: BrakeSystem::Air,
            mass_t: 120.0,
            main_res_psi: 140.0,
            throttle_pct: 35.0,
            rpm: if kind == LocoKind::Diesel { 650.0 } else { 0.0 },
            boiler_psi: if kind == LocoKind::Steam { 220.0 } else { 0.0 },
            line_kv: if kind == LocoKind::Electric { 25.0 } else { 0.0 },
            coupler_kn: 180.0,
            ..Car::wagon(id, BrakeSystem::Air)
        }
    }

    fn is_loco(&self) -> bool {
        matches!(self.kind, CarKind::Loco(_))
    }
}

/// The whole consist plus train-level state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Train {
    /// Train designation shown on the Common tab.
    pub name: String,
    /// Cars in consist order, lead first.
    pub cars: Vec<Car>,
    /// Speed, mph.
    #[serde(default)]
    pub speed_mph: f64,
    /// Grade under the lead unit, percent (positive is uphill).
    #[serde(default)]
    pub gradient_pct: f64,
    /// Direction of travel.
    #[serde(default)]
    pub heading: String,
    /// Distance travelled, miles.
    #[serde(default)]
    pub odometer_mi: f64,
    /// Simulation clock, seconds since midnight.
    #[serde(default)]
    pub clock_s: u64,
    /// Next signal aspect for the Dispatcher tab.
    #[serde(default)]
    pub next_signal: String,
    /// Distance to the next signal, miles.
    #[serde(default)]
    pub next_signal_mi: f64,
    /// Movement authority limit, miles.
    #[serde(default)]
    pub authority_mi: f64,
}

impl Train {
    /// Locomotives in consist order.
    pub fn locomotives(&self) -> Vec<&Car> {
        self.cars.iter().filter(|c| c.is_loco()).collect()
    }

    /// Number of locomotives; the cursor's total locomotive pages.
    pub fn locomotive_count(&self) -> usize {
        self.cars.iter().filter(|c| c.is_loco()).count()
    }

    /// Whether Next/Prev locomotive commands do anything.
    ///
    /// A consist with a single locomotive never pages, whatever its kind.
    pub fn loco_paging_allowed(&self) -> bool {
        self.locomotive_count() > 1
    }

    /// Whether the lead locomotive is steam (its detail view is always
    /// paged, so the navigation overlay shows even for a single unit).
    pub fn steam_lead(&self) -> bool {
        self.locomotives()
            .first()
            .is_some_and(|c| c.kind == CarKind::Loco(LocoKind::Steam))
    }

    /// Load a consist snapshot from a JSON file.
    pub fn from_snapshot(
        path: &Path,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let s = std::fs::read_to_string(path)?;
        let train: Train = serde_json::from_str(&s)?;
        Ok(train)
    }

    /// Advance the demo feed one tick.
    ///
    /// Deterministic triangle-wave wobble on a few values so the HUD
    /// visibly refreshes; a stand-in for the simulator's state stream.
    pub fn tick(&mut self, frame: u64) {
        let wobble = |f: u64, period: u64| -> f64 {
            let half = period / 2;
            let p = f % period;
            let v = if p < half { p } else { period - p };
            v as f64 / half as f64
        };
        self.speed_mph = 40.0 + 8.0 * wobble(frame, 120);
        self.odometer_mi += self.speed_mph / 3600.0;
        self.clock_s = self.clock_s.wrapping_add(1);
        for (i, car) in self.cars.iter_mut().enumerate() {
            match car.brake {
                BrakeSystem::Air => {
                    car.brake_pipe_psi = 90.0 - 4.0 * wobble(frame + i as u64, 90);
                    car.brake_cyl_psi = 12.0 * wobble(frame + i as u64 * 7, 150);
                }
                BrakeSystem::Vacuum => {
                    car.vacuum_inhg = 21.0 - 3.0 * wobble(frame + i as u64, 110);
                }
            }
            if let CarKind::Loco(kind) = car.kind {
                car.rpm = match kind {
                    LocoKind::Diesel => 600.0 + 300.0 * wobble(frame + i as u64, 60),
                    _ => 0.0,
                };
                car.wheelslip = kind != LocoKind::Steam && frame % 200 < 6 && i == 0;
            }
        }
    }

    /// Built-in demo consist: two locomotives and a mixed-brake rake, which
    /// exercises header de-duplication and locomotive paging.
    pub fn demo() -> Self {
        let wagon = |id: &str, brake: BrakeSystem, load: f64| Car {
            load_pct: load,
            ..Car::wagon(id, brake)
        };
        let mut eot = Car::wagon("EOT-1", BrakeSystem::Air);
        eot.offline = true;
        Train {
            name: "Demo freight 4402".to_string(),
            cars: vec![
                Car::loco("D-4402", LocoKind::Diesel),
                Car::loco("E-7781", LocoKind::Electric),
                wagon("W-1001", BrakeSystem::Air, 85.0),
                wagon("W-1002", BrakeSystem::Air, 60.0),
                wagon("W-1003", BrakeSystem::Air, 92.0),
                wagon("V-2001", BrakeSystem::Vacuum, 40.0),
                wagon("V-2002", BrakeSystem::Vacuum, 55.0),
                eot,
            ],
            speed_mph: 40.0,
            gradient_pct: -0.4,
            heading: "Eastbound".to_string(),
            odometer_mi: 12.6,
            clock_s: 10 * 3600,
            next_signal: "Clear".to_string(),
            next_signal_mi: 1.8,
            authority_mi: 6.2,
        }
    }
}

/// Brake-table producer for one car.
struct BrakeRow<'a>(&'a Car);

impl StatusSource for BrakeRow<'_> {
    fn header(&self) -> Vec<&'static str> {
        match self.0.brake {
            BrakeSystem::Air => vec!["Car", "Type", "BC psi", "BP psi", "MR psi", "Handbrake"],
            BrakeSystem::Vacuum => vec!["Car", "Type", "Vac inHg", "Handbrake"],
        }
    }

    fn status(&self) -> Option<StatusLine> {
        let car = self.0;
        if car.offline {
            return None;
        }
        let hb = if car.handbrake { "Applied" } else { "-" };
        let hb_sev = if car.handbrake {
            Severity::Caution
        } else {
            Severity::Normal
        };
        Some(match car.brake {
            BrakeSystem::Air => {
                let bc_sev = if car.brake_cyl_psi > 50.0 {
                    Severity::Caution
                } else {
                    Severity::Normal
                };
                StatusLine::new()
                    .push(StatusCell::plain(&car.id))
                    .push(StatusCell::plain(car.kind.label()))
                    .push(StatusCell::with_severity(
                        format!("{:.0}", car.brake_cyl_psi),
                        bc_sev,
                    ))
                    .push(StatusCell::plain(format!("{:.0}", car.brake_pipe_psi)))
                    .push(StatusCell::plain(if car.is_loco() {
                        format!("{:.0}", car.main_res_psi)
                    } else {
                        "-".to_string()
                    }))
                    .push(StatusCell::with_severity(hb, hb_sev))
            }
            BrakeSystem::Vacuum => {
                let vac_sev = if car.vacuum_inhg < 15.0 {
                    Severity::Caution
                } else {
                    Severity::Normal
                };
                StatusLine::new()
                    .push(StatusCell::plain(&car.id))
                    .push(StatusCell::plain(car.kind.label()))
                    .push(StatusCell::with_severity(
                        format!("{:.1}", car.vacuum_inhg),
                        vac_sev,
                    ))
                    .push(StatusCell::with_severity(hb, hb_sev))
            }
        })
    }
}

/// Build the table for the active tab.
///
/// `loco_page` only matters on the Locomotive tab: 0 is the aggregate view,
/// 1..N selects a single locomotive's detail.
pub fn table_for_tab(train: &Train, tab: HudTab, loco_page: usize) -> StatusTable {
    match tab {
        HudTab::Common => common_table(train),
        HudTab::Consist => consist_table(train),
        HudTab::Locomotive => locomotive_table(train, loco_page),
        HudTab::Brake => brake_table(train),
        HudTab::Dispatcher => dispatcher_table(train),
    }
}

fn kv(table: &mut StatusTable, row: usize, label: &str, value: String, sev: Severity) {
    table.set_text(row, 0, label);
    table.set(row, 1, StatusCell::with_severity(value, sev));
}

fn common_table(train: &Train) -> StatusTable {
    let mut t = StatusTable::new();
    let hh = train.clock_s / 3600 % 24;
    let mm = train.clock_s / 60 % 60;
    let ss = train.clock_s % 60;
    kv(&mut t, 0, "Train", train.name.clone(), Severity::Normal);
    kv(&mut t, 1, "Time", format!("{hh:02}:{mm:02}:{ss:02}"), Severity::Normal);
    kv(
        &mut t,
        2,
        "Speed",
        format!("{:.1} mph", train.speed_mph),
        Severity::Normal,
    );
    let grade_sev = if train.gradient_pct.abs() > 2.0 {
        Severity::Caution
    } else {
        Severity::Normal
    };
    kv(
        &mut t,
        3,
        "Gradient",
        format!("{:+.1} %", train.gradient_pct),
        grade_sev,
    );
    kv(&mut t, 4, "Direction", train.heading.clone(), Severity::Normal);
    kv(
        &mut t,
        5,
        "Odometer",
        format!("{:.1} mi", train.odometer_mi),
        Severity::Info,
    );
    t
}

fn consist_table(train: &Train) -> StatusTable {
    let mut t = StatusTable::new();
    for (col, h) in ["Car", "Type", "Mass t", "Load %", "Coupler kN"]
        .iter()
        .enumerate()
    {
        t.set_text(0, col, *h);
    }
    t.set_header_rows(1);
    for (i, car) in train.cars.iter().enumerate() {
        let coupler_sev = if car.coupler_kn > 300.0 {
            Severity::Critical
        } else {
            Severity::Normal
        };
        t.set_line(
            i + 1,
            StatusLine::new()
                .push(StatusCell::plain(&car.id))
                .push(StatusCell::plain(car.kind.label()))
                .push(StatusCell::plain(format!("{:.0}", car.mass_t)))
                .push(StatusCell::plain(format!("{:.0}", car.load_pct)))
                .push(StatusCell::with_severity(
                    format!("{:.0}", car.coupler_kn),
                    coupler_sev,
                )),
        );
    }
    t
}

fn locomotive_table(train: &Train, loco_page: usize) -> StatusTable {
    let locos = train.locomotives();
    if loco_page == 0 || locos.is_empty() {
        // Aggregate view: one row per locomotive.
        let mut t = StatusTable::new();
        for (col, h) in ["Loco", "Kind", "Throttle %", "MR psi", "Slip"]
            .iter()
            .enumerate()
        {
            t.set_text(0, col, *h);
        }
        t.set_header_rows(1);
        for (i, car) in locos.iter().enumerate() {
            let slip = if car.wheelslip {
                StatusCell::with_severity("SLIP", Severity::Critical)
            } else {
                StatusCell::plain("-")
            };
            t.set_line(
                i + 1,
                StatusLine::new()
                    .push(StatusCell::plain(&car.id))
                    .push(StatusCell::plain(car.kind.label()))
                    .push(StatusCell::plain(format!("{:.0}", car.throttle_pct)))
                    .push(StatusCell::plain(format!("{:.0}", car.main_res_psi)))
                    .push(slip),
            );
        }
        return t;
    }

    // Detail view for one locomotive, selected 1-based by the cursor.
    let car = locos[loco_page.min(locos.len()) - 1];
    let mut t = StatusTable::new();
    kv(&mut t, 0, "Loco", car.id.clone(), Severity::Normal);
    kv(
        &mut t,
        1,
        "Throttle",
        format!("{:.0} %", car.throttle_pct),
        Severity::Normal,
    );
    kv(
        &mut t,
        2,
        "Main res",
        format!("{:.0} psi", car.main_res_psi),
        Severity::Normal,
    );
    let mut row = 3;
    if let CarKind::Loco(kind) = car.kind {
        match kind {
            LocoKind::Steam => {
                let sev = if car.boiler_psi < 180.0 {
                    Severity::Caution
                } else {
                    Severity::Normal
                };
                kv(&mut t, row, "Boiler", format!("{:.0} psi", car.boiler_psi), sev);
                row += 1;
            }
            LocoKind::Diesel => {
                kv(&mut t, row, "Engine", format!("{:.0} rpm", car.rpm), Severity::Normal);
                row += 1;
            }
            LocoKind::Electric => {
                kv(&mut t, row, "Line", format!("{:.1} kV", car.line_kv), Severity::Normal);
                row += 1;
            }
        }
    }
    if car.wheelslip {
        kv(&mut t, row, "Wheelslip", "SLIP".to_string(), Severity::Critical);
    }
    t
}

fn brake_table(train: &Train) -> StatusTable {
    let rows: Vec<BrakeRow<'_>> = train.cars.iter().map(BrakeRow).collect();
    let sources: Vec<&dyn StatusSource> = rows.iter().map(|r| r as &dyn StatusSource).collect();
    table::build_table(&sources)
}

fn dispatcher_table(train: &Train) -> StatusTable {
    let mut t = StatusTable::new();
    let aspect_sev = match train.next_signal.as_str() {
        "Stop" => Severity::Critical,
        "Approach" => Severity::Caution,
        _ => Severity::Normal,
    };
    kv(&mut t, 0, "Next signal", train.next_signal.clone(), aspect_sev);
    kv(
        &mut t,
        1,
        "Distance",
        format!("{:.1} mi", train.next_signal_mi),
        Severity::Normal,
    );
    kv(
        &mut t,
        2,
        "Authority",
        format!("{:.1} mi", train.authority_mi),
        Severity::Info,
    );
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Demo consist shape supports locomotive paging and mixed brakes
    ///
    /// - Input: `Train::demo()`
    /// - Output: Two locomotives, paging allowed, no steam lead
    #[test]
    fn consist_demo_shape() {
        let t = Train::demo();
        assert_eq!(t.locomotive_count(), 2);
        assert!(t.loco_paging_allowed());
        assert!(!t.steam_lead());
    }

    /// What: Single-locomotive consists disable locomotive paging
    ///
    /// - Input: Demo consist reduced to one locomotive
    /// - Output: `loco_paging_allowed` is false, count is 1
    #[test]
    fn consist_single_loco_forbids_paging() {
        let mut t = Train::demo();
        t.cars.retain(|c| !matches!(c.kind, CarKind::Loco(LocoKind::Electric)));
        assert_eq!(t.locomotive_count(), 1);
        assert!(!t.loco_paging_allowed());
    }

    /// What: Brake table groups headers by brake system and blanks offline cars
    ///
    /// - Input: Demo consist (air cars, then vacuum cars, then an offline EOT)
    /// - Output: Air header at row 0, vacuum header later, offline car blank
    #[test]
    fn consist_brake_table_headers_and_blanks() {
        let train = Train::demo();
        let t = brake_table(&train);
        assert_eq!(t.cell(0, 2).map(|c| c.text.as_str()), Some("BC psi"));
        // 1 air header + 5 air cars, then the vacuum header.
        assert_eq!(t.cell(6, 2).map(|c| c.text.as_str()), Some("Vac inHg"));
        // Offline EOT gets a fresh air header then a blank row at the end.
        let last = t.row_count() - 1;
        assert_eq!(t.cell(last, 0).map(|c| c.text.as_str()), Some(""));
    }

    /// What: Locomotive detail view follows the kind capability tag
    ///
    /// - Input: Detail pages 1 and 2 of the demo consist
    /// - Output: Diesel page shows engine RPM, electric page shows line kV
    #[test]
    fn consist_loco_detail_per_kind() {
        let train = Train::demo();
        let d = locomotive_table(&train, 1);
        assert_eq!(d.cell(3, 0).map(|c| c.text.as_str()), Some("Engine"));
        let e = locomotive_table(&train, 2);
        assert_eq!(e.cell(3, 0).map(|c| c.text.as_str()), Some("Line"));
    }

    /// What: Snapshot JSON roundtrip preserves the consist
    ///
    /// - Input: Demo consist serialized then parsed back
    /// - Output: Same car count and ids
    #[test]
    fn consist_snapshot_roundtrip() {
        let train = Train::demo();
        let s = serde_json::to_string(&train).expect("serialize");
        let back: Train = serde_json::from_str(&s).expect("deserialize");
        assert_eq!(back.cars.len(), train.cars.len());
        assert_eq!(back.cars[0].id, train.cars[0].id);
    }

    /// What: Ticking keeps values in their plausible bands
    ///
    /// - Input: 500 ticks of the demo consist
    /// - Output: Speed stays within the wobble band, clock advances
    #[test]
    fn consist_tick_bounded() {
        let mut train = Train::demo();
        let clock0 = train.clock_s;
        for f in 0..500 {
            train.tick(f);
            assert!(train.speed_mph >= 40.0 && train.speed_mph <= 48.0);
        }
        assert_eq!(train.clock_s, clock0 + 500);
    }
}
