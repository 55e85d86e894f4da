//! Random forest over small integer feature vectors.
//!
//! Trees are grown with Gini impurity on bootstrap samples, considering a
//! random subset of `sqrt(n_features)` features per split. All randomness is
//! drawn from a seeded [`StdRng`], so equal inputs and parameters produce equal
//! forests.

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub seed: u64,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            seed: 42,
            max_depth: None,
            min_samples_split: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    n_classes: usize,
    n_features: usize,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn fit(
        samples: &[Vec<i64>],
        targets: &[usize],
        n_classes: usize,
        params: &ForestParams,
    ) -> Result<Self, CoreError> {
        if samples.is_empty() {
            return Err(CoreError::SchemaError(
                "cannot fit a forest on zero samples".to_string(),
            ));
        }
        if samples.len() != targets.len() {
            return Err(CoreError::SchemaError(format!(
                "{} samples but {} targets",
                samples.len(),
                targets.len()
            )));
        }
        if params.n_estimators == 0 {
            return Err(CoreError::SchemaError(
                "n_estimators must be at least 1".to_string(),
            ));
        }

        let n_features = samples[0].len();
        if samples.iter().any(|sample| sample.len() != n_features) {
            return Err(CoreError::SchemaError(
                "samples have differing feature counts".to_string(),
            ));
        }
        if let Some(target) = targets.iter().find(|target| **target >= n_classes) {
            return Err(CoreError::SchemaError(format!(
                "target class {target} out of range for {n_classes} classes"
            )));
        }

        let max_features = ((n_features as f64).sqrt().floor() as usize).max(1);
        let mut rng = StdRng::seed_from_u64(params.seed);
        let n = samples.len();

        let trees = (0..params.n_estimators)
            .map(|_| {
                let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                let mut tree_rng = StdRng::seed_from_u64(rng.next_u64());
                let mut builder = TreeBuilder {
                    samples,
                    targets,
                    n_classes,
                    max_features,
                    params,
                    rng: &mut tree_rng,
                    nodes: Vec::new(),
                };
                builder.grow(bootstrap, 0);
                DecisionTree {
                    nodes: builder.nodes,
                }
            })
            .collect();

        Ok(Self {
            n_classes,
            n_features,
            trees,
        })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Mean of the per-tree leaf class distributions.
    pub fn predict_proba(&self, sample: &[i64]) -> Vec<f64> {
        let mut totals = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (total, p) in totals.iter_mut().zip(tree.leaf_distribution(sample)) {
                *total += p;
            }
        }

        let count = self.trees.len().max(1) as f64;
        totals.iter_mut().for_each(|total| *total /= count);
        totals
    }

    /// Most probable class; ties go to the lowest class index.
    pub fn predict(&self, sample: &[i64]) -> usize {
        let proba = self.predict_proba(sample);
        let mut best = 0;
        for (class, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = class;
            }
        }
        best
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Node {
    Leaf {
        distribution: Vec<f64>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    fn leaf_distribution(&self, sample: &[i64]) -> &[f64] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { distribution } => return distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = sample.get(*feature).copied().unwrap_or(0) as f64;
                    index = if value <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

struct TreeBuilder<'a> {
    samples: &'a [Vec<i64>],
    targets: &'a [usize],
    n_classes: usize,
    max_features: usize,
    params: &'a ForestParams,
    rng: &'a mut StdRng,
    nodes: Vec<Node>,
}

impl TreeBuilder<'_> {
    /// Grows the subtree for `indices` and returns its root node index.
    fn grow(&mut self, indices: Vec<usize>, depth: usize) -> usize {
        let counts = self.class_counts(&indices);
        let node_index = self.nodes.len();

        let pure = counts.iter().filter(|count| **count > 0).count() <= 1;
        let too_small = indices.len() < self.params.min_samples_split;
        let too_deep = self.params.max_depth.is_some_and(|max| depth >= max);

        let split = if pure || too_small || too_deep {
            None
        } else {
            self.best_split(&indices)
        };

        let Some(split) = split else {
            self.nodes.push(Node::Leaf {
                distribution: distribution(&counts),
            });
            return node_index;
        };

        let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|i| (self.samples[*i][split.feature] as f64) <= split.threshold);

        // Placeholder until both children exist.
        self.nodes.push(Node::Leaf {
            distribution: Vec::new(),
        });
        let left = self.grow(left_indices, depth + 1);
        let right = self.grow(right_indices, depth + 1);
        self.nodes[node_index] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };

        node_index
    }

    fn best_split(&mut self, indices: &[usize]) -> Option<SplitCandidate> {
        let n_features = self.samples[indices[0]].len();
        let mut features: Vec<usize> = (0..n_features).collect();
        features.shuffle(&mut *self.rng);

        let mut best: Option<SplitCandidate> = None;
        for (visited, feature) in features.into_iter().enumerate() {
            // Keep drawing past max_features only while no valid split exists.
            if visited >= self.max_features && best.is_some() {
                break;
            }
            if let Some(candidate) = self.best_split_for_feature(indices, feature) {
                if best
                    .as_ref()
                    .is_none_or(|current| candidate.impurity < current.impurity)
                {
                    best = Some(candidate);
                }
            }
        }
        best
    }

    fn best_split_for_feature(&self, indices: &[usize], feature: usize) -> Option<SplitCandidate> {
        let mut points: Vec<(i64, usize)> = indices
            .iter()
            .map(|i| (self.samples[*i][feature], self.targets[*i]))
            .collect();
        points.sort_unstable();

        let total = points.len();
        let mut right_counts = vec![0usize; self.n_classes];
        for (_, class) in &points {
            right_counts[*class] += 1;
        }
        let mut left_counts = vec![0usize; self.n_classes];

        let mut best: Option<SplitCandidate> = None;
        for position in 0..total - 1 {
            let (value, class) = points[position];
            left_counts[class] += 1;
            right_counts[class] -= 1;

            let next_value = points[position + 1].0;
            if next_value == value {
                continue;
            }

            let left_size = position + 1;
            let right_size = total - left_size;
            let impurity = (left_size as f64 * gini(&left_counts, left_size)
                + right_size as f64 * gini(&right_counts, right_size))
                / total as f64;

            if best
                .as_ref()
                .is_none_or(|current| impurity < current.impurity)
            {
                best = Some(SplitCandidate {
                    feature,
                    threshold: (value as f64 + next_value as f64) / 2.0,
                    impurity,
                });
            }
        }
        best
    }

    fn class_counts(&self, indices: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for i in indices {
            counts[self.targets[*i]] += 1;
        }
        counts
    }
}

fn gini(counts: &[usize], size: usize) -> f64 {
    if size == 0 {
        return 0.0;
    }
    let size = size as f64;
    1.0 - counts
        .iter()
        .map(|count| {
            let p = *count as f64 / size;
            p * p
        })
        .sum::<f64>()
}

fn distribution(counts: &[usize]) -> Vec<f64> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|count| *count as f64 / total as f64)
        .collect()
}
