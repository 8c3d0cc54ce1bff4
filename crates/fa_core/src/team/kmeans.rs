//! # Two-Cluster Color Model
//!
//! Deterministic k-means (k = 2) over RGB points, used both for separating
//! a jersey from its background inside one crop and for splitting all
//! jersey colors into two teams.
//!
//! ## Algorithm
//! 1. k-means++ seeding from a `ChaCha8Rng` seeded with `seed`
//! 2. Lloyd iterations until labels are stable or `max_iterations`
//! 3. Repeat `restarts` times, keep the lowest inertia
//! 4. Order centroids canonically (darker first) so cluster indices are
//!    stable across seeds
//!
//! Inputs with fewer than two distinct colors cannot be split; they are
//! reported as `ColorFit::Uniform` instead of being clustered.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of clusters fitted by this model.
pub const CLUSTERS: usize = 2;

pub type ColorPoint = [f32; 3];

/// Clustering knobs.
#[derive(Debug, Clone, Copy)]
pub struct KMeansParams {
    pub seed: u64,
    pub restarts: usize,
    pub max_iterations: usize,
}

impl Default for KMeansParams {
    fn default() -> Self {
        Self {
            seed: 0,
            restarts: 10,
            max_iterations: 300,
        }
    }
}

/// Fitted centroids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorModel {
    centroids: [ColorPoint; CLUSTERS],
}

impl ColorModel {
    pub fn from_centroids(centroids: [ColorPoint; CLUSTERS]) -> Self {
        Self { centroids }
    }

    pub fn centroids(&self) -> &[ColorPoint; CLUSTERS] {
        &self.centroids
    }

    pub fn centroid(&self, cluster: usize) -> ColorPoint {
        self.centroids[cluster]
    }

    /// Index of the nearest centroid; ties go to cluster 0.
    pub fn predict(&self, point: ColorPoint) -> usize {
        nearest(&self.centroids, point).0
    }
}

/// Result of a full fit.
#[derive(Debug, Clone)]
pub struct ClusterFit {
    pub model: ColorModel,
    /// Cluster index per input point
    pub labels: Vec<usize>,
    /// Sum of squared distances to assigned centroids
    pub inertia: f32,
}

/// Outcome of fitting the model to a point set.
#[derive(Debug, Clone)]
pub enum ColorFit {
    /// No points
    Empty,
    /// Fewer than two distinct colors; carries that color
    Uniform(ColorPoint),
    Clustered(ClusterFit),
}

pub fn sq_dist(a: ColorPoint, b: ColorPoint) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

fn nearest(centroids: &[ColorPoint; CLUSTERS], point: ColorPoint) -> (usize, f32) {
    let mut best = (0, sq_dist(centroids[0], point));
    for (i, c) in centroids.iter().enumerate().skip(1) {
        let d = sq_dist(*c, point);
        if d < best.1 {
            best = (i, d);
        }
    }
    best
}

/// Fit two clusters to `points`.
pub fn fit(points: &[ColorPoint], params: &KMeansParams) -> ColorFit {
    let first = match points.first() {
        Some(p) => *p,
        None => return ColorFit::Empty,
    };
    if points.iter().all(|p| *p == first) {
        return ColorFit::Uniform(first);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let mut best: Option<ClusterFit> = None;

    for _ in 0..params.restarts.max(1) {
        let seeds = seed_plus_plus(points, &mut rng);
        let run = lloyd(points, seeds, params.max_iterations.max(1));
        let better = best.as_ref().map_or(true, |b| run.inertia < b.inertia);
        if better {
            best = Some(run);
        }
    }

    match best {
        Some(fit) => ColorFit::Clustered(canonicalize(fit)),
        None => ColorFit::Uniform(first),
    }
}

/// k-means++ seeding for k = 2.
fn seed_plus_plus(points: &[ColorPoint], rng: &mut ChaCha8Rng) -> [ColorPoint; CLUSTERS] {
    let c0 = points[rng.gen_range(0..points.len())];

    let weights: Vec<f32> = points.iter().map(|p| sq_dist(*p, c0)).collect();
    let total: f32 = weights.iter().sum();
    if total <= 0.0 {
        return [c0, c0];
    }

    let mut target = rng.gen::<f32>() * total;
    let mut c1 = c0;
    for (p, w) in points.iter().zip(&weights) {
        if *w <= 0.0 {
            continue;
        }
        c1 = *p;
        target -= w;
        if target <= 0.0 {
            break;
        }
    }
    [c0, c1]
}

fn lloyd(points: &[ColorPoint], mut centroids: [ColorPoint; CLUSTERS], max_iterations: usize) -> ClusterFit {
    let mut labels = vec![usize::MAX; points.len()];

    for _ in 0..max_iterations {
        if !assign_labels(points, &centroids, &mut labels) {
            break;
        }

        let mut sums = [[0.0f64; 3]; CLUSTERS];
        let mut counts = [0usize; CLUSTERS];
        for (label, p) in labels.iter().zip(points) {
            counts[*label] += 1;
            for ch in 0..3 {
                sums[*label][ch] += p[ch] as f64;
            }
        }

        for k in 0..CLUSTERS {
            if counts[k] == 0 {
                // Empty cluster: reseed on the point farthest from its centroid
                let far = farthest_point(points, &labels, &centroids);
                centroids[k] = points[far];
                labels[far] = k;
            } else {
                let n = counts[k] as f64;
                centroids[k] = [
                    (sums[k][0] / n) as f32,
                    (sums[k][1] / n) as f32,
                    (sums[k][2] / n) as f32,
                ];
            }
        }
    }

    // Labels must reflect the final centroids when iterations ran out
    assign_labels(points, &centroids, &mut labels);

    let inertia = labels
        .iter()
        .zip(points)
        .map(|(l, p)| sq_dist(centroids[*l], *p))
        .sum();

    ClusterFit {
        model: ColorModel::from_centroids(centroids),
        labels,
        inertia,
    }
}

/// Nearest-centroid labels; true if any label changed.
fn assign_labels(points: &[ColorPoint], centroids: &[ColorPoint; CLUSTERS], labels: &mut [usize]) -> bool {
    let mut changed = false;
    for (label, p) in labels.iter_mut().zip(points) {
        let (cluster, _) = nearest(centroids, *p);
        if *label != cluster {
            *label = cluster;
            changed = true;
        }
    }
    changed
}

fn farthest_point(points: &[ColorPoint], labels: &[usize], centroids: &[ColorPoint; CLUSTERS]) -> usize {
    let mut best = (0, f32::NEG_INFINITY);
    for (i, (p, l)) in points.iter().zip(labels).enumerate() {
        let d = sq_dist(centroids[*l], *p);
        if d > best.1 {
            best = (i, d);
        }
    }
    best.0
}

fn canonical_key(c: ColorPoint) -> (f32, f32, f32, f32) {
    (c[0] + c[1] + c[2], c[0], c[1], c[2])
}

/// Darker centroid first; labels follow the swap.
fn canonicalize(mut fit: ClusterFit) -> ClusterFit {
    let [a, b] = *fit.model.centroids();
    let swap = canonical_key(b)
        .partial_cmp(&canonical_key(a))
        .map_or(false, |o| o.is_lt());
    if swap {
        fit.model = ColorModel::from_centroids([b, a]);
        for label in fit.labels.iter_mut() {
            *label = 1 - *label;
        }
    }
    fit
}
