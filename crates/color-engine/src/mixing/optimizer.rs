//! Paint-mix recipe search
//!
//! The search works on a linear LAB blend: a mixture's color is the
//! share-weighted mean of its paints' LAB values. It is an approximation of
//! real pigment behaviour, good enough to suggest a starting recipe.
//!
//! # Algorithm
//!
//! 1. **Candidates**: the first paint with L > 95 (white anchor), the first
//!    paint with L < 5 (black anchor), then the three remaining paints closest
//!    to the target by ΔE00 (stable, so ties keep dataset order).
//! 2. **Grid**: every split of 100% over the first four candidates in 5% steps
//!    (1,771 combinations), scanned `i, j, k` outer to inner with the fourth
//!    share derived. The lowest ΔE00 wins; ties keep the first found.
//! 3. **Refinement**: when the grid result is above the color-correction
//!    threshold, coordinate descent moves 1% and then 0.1% between pairs of
//!    paints, accepting strict improvements only.
//!
//! Shares are held as integer tenths of a percent throughout, so reported
//! percentages are exact to one decimal and always sum to 100.

use std::sync::Arc;

use super::cancel::CancelFlag;
use super::options::{MixOptions, GRID_SLOTS};
use super::paint::Paint;
use super::result::{MatchQuality, MixComponent, MixResult};
use crate::color::Lab;
use crate::database::ColorDatabase;
use crate::delta_e::{delta_e_2000, needs_color_correction};
use crate::error::ColorError;

/// 100% in tenths of a percent.
const WHOLE: u32 = 1000;

/// Grid resolution: 100% / 20 = 5% per step.
const GRID_STEPS: u32 = 20;

/// One grid step in tenths.
const GRID_STEP: u32 = WHOLE / GRID_STEPS;

/// Refinement step sizes in tenths: 1% then 0.1%.
const REFINE_STEPS: [u32; 2] = [10, 1];

/// Upper bound on accepted refinement moves.
const MAX_REFINE_MOVES: usize = 10_000;

/// Lightness above which a paint can serve as the white anchor.
const WHITE_ANCHOR_L: f64 = 95.0;

/// Lightness below which a paint can serve as the black anchor.
const BLACK_ANCHOR_L: f64 = 5.0;

/// Number of non-anchor paints taken as candidates.
const NEAREST_CANDIDATES: usize = 3;

type Shares = [u32; GRID_SLOTS];

/// Best mixture found so far.
#[derive(Debug, Clone, Copy)]
struct Best {
    shares: Shares,
    delta_e: f64,
}

/// Computes paint-mixing recipes against a shared reference table.
///
/// Every entry of the database is a [`Paint`]; the paint list is derived once
/// at construction.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use color_engine::{ColorDatabase, ColorDatabaseEntry, Lab, MixOptions, PaintMixOptimizer, Rgb};
///
/// let entries = ["#ffffff", "#000000", "#ff0000", "#0000ff"]
///     .iter()
///     .enumerate()
///     .map(|(i, hex)| ColorDatabaseEntry::from_hex(format!("Paint {i}"), hex, "test").unwrap())
///     .collect();
/// let optimizer = PaintMixOptimizer::new(Arc::new(ColorDatabase::new(entries).unwrap()));
///
/// let target = Lab::from(Rgb::new(255, 128, 128));
/// let recipe = optimizer.mix(target, &MixOptions::default()).unwrap();
///
/// assert!((recipe.total_percentage() - 100.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct PaintMixOptimizer {
    database: Arc<ColorDatabase>,
    paints: Vec<Paint>,
}

impl PaintMixOptimizer {
    pub fn new(database: Arc<ColorDatabase>) -> Self {
        let paints = database.iter().map(Paint::from).collect();
        Self { database, paints }
    }

    pub fn database(&self) -> &ColorDatabase {
        &self.database
    }

    /// All paints, in database order.
    pub fn paints(&self) -> &[Paint] {
        &self.paints
    }

    /// Candidate paints for `target`: white anchor, black anchor and up to
    /// three nearest remaining paints.
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidColorInput`] for a non-finite target
    /// - [`ColorError::NoReferenceData`] for an empty database
    /// - [`ColorError::InsufficientPaintPalette`] when an anchor is missing
    pub fn select_candidates(&self, target: Lab) -> Result<Vec<&Paint>, ColorError> {
        let target = target.validated()?;
        self.database.ensure_non_empty()?;

        let white = self
            .paints
            .iter()
            .position(|p| p.lab.l > WHITE_ANCHOR_L)
            .ok_or(ColorError::InsufficientPaintPalette { missing: "white" })?;
        let black = self
            .paints
            .iter()
            .position(|p| p.lab.l < BLACK_ANCHOR_L)
            .ok_or(ColorError::InsufficientPaintPalette { missing: "black" })?;

        let mut rest: Vec<(usize, f64)> = self
            .paints
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != white && i != black)
            .map(|(i, paint)| (i, delta_e_2000(target, paint.lab)))
            .collect();
        rest.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut candidates = vec![&self.paints[white], &self.paints[black]];
        candidates.extend(
            rest.iter()
                .take(NEAREST_CANDIDATES)
                .map(|&(i, _)| &self.paints[i]),
        );
        Ok(candidates)
    }

    /// Compute a recipe for `target`.
    ///
    /// # Errors
    ///
    /// Those of [`select_candidates`](Self::select_candidates), plus
    /// [`ColorError::InvalidMixOptions`] for `max_paints == 0`.
    pub fn mix(&self, target: Lab, options: &MixOptions) -> Result<MixResult, ColorError> {
        self.mix_with_cancel(target, options, &CancelFlag::new())
    }

    /// [`mix`](Self::mix) that stops with [`ColorError::Cancelled`] once
    /// `cancel` is set.
    pub fn mix_with_cancel(
        &self,
        target: Lab,
        options: &MixOptions,
        cancel: &CancelFlag,
    ) -> Result<MixResult, ColorError> {
        options.validate()?;
        let candidates = self.select_candidates(target)?;
        let slots = candidates.len().min(GRID_SLOTS);
        let labs: Vec<Lab> = candidates[..slots].iter().map(|p| p.lab).collect();
        let costs: Vec<f64> = candidates[..slots].iter().map(|p| p.cost_factor).collect();
        let limit = options.paint_limit();

        let mut best = grid_search(target, &labs, &costs, limit, options, cancel)?;

        if options.allow_color_correction && needs_color_correction(best.delta_e) {
            best = refine(target, &labs, limit, best, cancel)?;
        }

        let mixed_lab = mix_lab(&labs, &best.shares);
        let paints: Vec<MixComponent> = candidates[..slots]
            .iter()
            .zip(best.shares)
            .filter(|&(_, share)| share > 0)
            .map(|(paint, share)| MixComponent {
                paint: (*paint).clone(),
                percentage: share as f64 / 10.0,
            })
            .collect();

        Ok(MixResult {
            estimated_cost: paints
                .iter()
                .map(|c| c.paint.cost_factor * c.percentage / 100.0)
                .sum(),
            paints,
            delta_e: best.delta_e,
            requires_color_correction: needs_color_correction(best.delta_e),
            quality: MatchQuality::from_delta_e(best.delta_e),
            mixed_lab,
            mixed_hex: mixed_lab.to_rgb().to_hex(),
        })
    }
}

/// Exhaustive 5% grid over the candidate slots.
fn grid_search(
    target: Lab,
    labs: &[Lab],
    costs: &[f64],
    limit: usize,
    options: &MixOptions,
    cancel: &CancelFlag,
) -> Result<Best, ColorError> {
    let mut best: Option<Best> = None;

    for i in 0..=GRID_STEPS {
        if cancel.is_cancelled() {
            return Err(ColorError::Cancelled);
        }
        for j in 0..=GRID_STEPS - i {
            for k in 0..=GRID_STEPS - i - j {
                let l = GRID_STEPS - i - j - k;
                let shares = [i * GRID_STEP, j * GRID_STEP, k * GRID_STEP, l * GRID_STEP];

                // Missing candidates are pinned to zero
                if shares[labs.len()..].iter().any(|&s| s > 0) || nonzero(&shares) > limit {
                    continue;
                }

                let delta_e = delta_e_2000(target, mix_lab(labs, &shares));
                let better = match best {
                    None => true,
                    Some(current) if delta_e < current.delta_e => true,
                    Some(current) if delta_e == current.delta_e && options.prefer_cost_effective => {
                        cheaper(&shares, &current.shares, costs)
                    }
                    _ => false,
                };
                if better {
                    best = Some(Best { shares, delta_e });
                }
            }
        }
    }

    // The pure white anchor is always a valid combination
    best.ok_or(ColorError::NoReferenceData)
}

/// Coordinate descent on the simplex, moving `step` tenths from one slot to
/// another while that strictly lowers ΔE.
fn refine(
    target: Lab,
    labs: &[Lab],
    limit: usize,
    start: Best,
    cancel: &CancelFlag,
) -> Result<Best, ColorError> {
    let mut best = start;
    let mut moves = 0;

    for step in REFINE_STEPS {
        loop {
            if cancel.is_cancelled() {
                return Err(ColorError::Cancelled);
            }

            let mut improved = false;
            for from in 0..labs.len() {
                for to in 0..labs.len() {
                    if from == to || best.shares[from] < step {
                        continue;
                    }
                    let mut shares = best.shares;
                    shares[from] -= step;
                    shares[to] += step;
                    if nonzero(&shares) > limit {
                        continue;
                    }

                    let delta_e = delta_e_2000(target, mix_lab(labs, &shares));
                    if delta_e < best.delta_e {
                        best = Best { shares, delta_e };
                        improved = true;
                        moves += 1;
                    }
                }
            }

            if !improved || moves >= MAX_REFINE_MOVES {
                break;
            }
        }
    }

    Ok(best)
}

/// Share-weighted mean of the slot colors.
fn mix_lab(labs: &[Lab], shares: &Shares) -> Lab {
    let mut mixed = Lab::new(0.0, 0.0, 0.0);
    for (lab, &share) in labs.iter().zip(shares) {
        let weight = share as f64 / WHOLE as f64;
        mixed.l += lab.l * weight;
        mixed.a += lab.a * weight;
        mixed.b += lab.b * weight;
    }
    mixed
}

fn nonzero(shares: &Shares) -> usize {
    shares.iter().filter(|&&s| s > 0).count()
}

fn cost(shares: &Shares, costs: &[f64]) -> f64 {
    costs
        .iter()
        .zip(shares)
        .map(|(c, &s)| c * s as f64 / WHOLE as f64)
        .sum()
}

/// Fewer paints first, then lower estimated cost.
fn cheaper(candidate: &Shares, current: &Shares, costs: &[f64]) -> bool {
    let (n_candidate, n_current) = (nonzero(candidate), nonzero(current));
    if n_candidate != n_current {
        return n_candidate < n_current;
    }
    cost(candidate, costs) < cost(current, costs)
}
