//! Decision Tree - CART with Gini impurity
//!
//! Grown to purity by default. At each node the features are visited in a
//! random order and the best split among the first `max_features`
//! non-constant ones wins; constant features don't count toward that budget.

use ndarray::{Array2, ArrayView1};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::logic::types::Label;

/// Binary problem: benign, phishing
pub const N_CLASSES: usize = 2;

/// Growth limits for a single tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// Non-constant features examined per split (>= 1)
    pub max_features: usize,
    /// Nodes with fewer samples become leaves
    pub min_samples_split: usize,
    /// None = unlimited
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        probabilities: [f32; N_CLASSES],
    },
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    feature: usize,
    threshold: f32,
    impurity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
    depth: usize,
}

/// Borrowed training data for one fit
struct FitContext<'a> {
    features: &'a Array2<f32>,
    labels: &'a [Label],
    params: TreeParams,
}

impl DecisionTree {
    /// Fit on the rows listed in `indices` (duplicates allowed, as in a bootstrap draw)
    pub fn fit<R: Rng + ?Sized>(
        features: &Array2<f32>,
        labels: &[Label],
        indices: &[usize],
        params: TreeParams,
        rng: &mut R,
    ) -> Self {
        let ctx = FitContext { features, labels, params };
        let mut tree = Self {
            nodes: Vec::new(),
            depth: 0,
        };
        tree.grow(&ctx, indices.to_vec(), 0, rng);
        tree
    }

    fn grow<R: Rng + ?Sized>(
        &mut self,
        ctx: &FitContext<'_>,
        indices: Vec<usize>,
        depth: usize,
        rng: &mut R,
    ) -> usize {
        self.depth = self.depth.max(depth);
        let counts = class_counts(ctx.labels, &indices);

        let is_pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let depth_reached = ctx.params.max_depth.map_or(false, |max| depth >= max);
        if is_pure || depth_reached || indices.len() < ctx.params.min_samples_split {
            return self.push_leaf(counts);
        }

        let Some(split) = best_split(ctx, &indices, rng) else {
            return self.push_leaf(counts);
        };

        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .partition(|&&i| ctx.features[[i, split.feature]] <= split.threshold);

        // Placeholder, patched once both children exist
        let id = self.nodes.len();
        self.nodes.push(Node::Leaf {
            probabilities: [0.0; N_CLASSES],
        });

        let left = self.grow(ctx, left_rows, depth + 1, rng);
        let right = self.grow(ctx, right_rows, depth + 1, rng);
        self.nodes[id] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        id
    }

    fn push_leaf(&mut self, counts: [usize; N_CLASSES]) -> usize {
        let total: usize = counts.iter().sum();
        let mut probabilities = [0.0; N_CLASSES];
        if total > 0 {
            for (p, c) in probabilities.iter_mut().zip(counts.iter()) {
                *p = *c as f32 / total as f32;
            }
        }
        self.nodes.push(Node::Leaf { probabilities });
        self.nodes.len() - 1
    }

    /// Class probabilities of the leaf `row` falls into.
    /// Missing columns read as 0.0.
    pub fn predict_proba(&self, row: ArrayView1<'_, f32>) -> [f32; N_CLASSES] {
        let mut id = 0;
        loop {
            match self.nodes.get(id) {
                Some(Node::Leaf { probabilities, .. }) => return *probabilities,
                Some(Node::Split { feature, threshold, left, right }) => {
                    let value = row.get(*feature).copied().unwrap_or(0.0);
                    id = if value <= *threshold { *left } else { *right };
                }
                None => return [0.0; N_CLASSES],
            }
        }
    }

    pub fn predict(&self, row: ArrayView1<'_, f32>) -> Label {
        argmax(&self.predict_proba(row))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| matches!(n, Node::Leaf { .. })).count()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Highest probability wins, ties go to the lower class
pub fn argmax(probabilities: &[f32; N_CLASSES]) -> Label {
    let mut best = 0;
    for (i, p) in probabilities.iter().enumerate().skip(1) {
        if *p > probabilities[best] {
            best = i;
        }
    }
    Label::from_class_index(best)
}

fn class_counts(labels: &[Label], indices: &[usize]) -> [usize; N_CLASSES] {
    let mut counts = [0usize; N_CLASSES];
    for &i in indices {
        counts[labels[i].class_index()] += 1;
    }
    counts
}

fn gini(counts: &[usize; N_CLASSES], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

fn best_split<R: Rng + ?Sized>(
    ctx: &FitContext<'_>,
    indices: &[usize],
    rng: &mut R,
) -> Option<SplitCandidate> {
    let mut order: Vec<usize> = (0..ctx.features.ncols()).collect();
    order.shuffle(rng);

    let mut best: Option<SplitCandidate> = None;
    let mut examined = 0;

    for feature in order {
        if examined >= ctx.params.max_features && best.is_some() {
            break;
        }
        if let Some(candidate) = best_threshold(ctx, indices, feature) {
            examined += 1;
            if best.map_or(true, |b| candidate.impurity < b.impurity) {
                best = Some(candidate);
            }
        }
    }

    best
}

/// Best threshold on one feature, None when the feature is constant here
fn best_threshold(ctx: &FitContext<'_>, indices: &[usize], feature: usize) -> Option<SplitCandidate> {
    let mut column: Vec<(f32, Label)> = indices
        .iter()
        .map(|&i| (ctx.features[[i, feature]], ctx.labels[i]))
        .collect();
    column.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (first, last) = (column.first()?.0, column.last()?.0);
    if first == last {
        return None;
    }

    let total = column.len();
    let mut totals = [0usize; N_CLASSES];
    for (_, label) in &column {
        totals[label.class_index()] += 1;
    }

    let mut left = [0usize; N_CLASSES];
    let mut best: Option<SplitCandidate> = None;

    for pos in 0..total - 1 {
        left[column[pos].1.class_index()] += 1;

        let (value, next) = (column[pos].0, column[pos + 1].0);
        if value == next {
            continue;
        }

        let n_left = pos + 1;
        let n_right = total - n_left;
        let right = [totals[0] - left[0], totals[1] - left[1]];
        let impurity = (n_left as f64 * gini(&left, n_left) + n_right as f64 * gini(&right, n_right))
            / total as f64;

        if best.map_or(true, |b| impurity < b.impurity) {
            let mut threshold = value + (next - value) / 2.0;
            if threshold >= next {
                threshold = value;
            }
            best = Some(SplitCandidate { feature, threshold, impurity });
        }
    }

    best
}
