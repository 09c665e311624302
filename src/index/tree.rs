//! Augmented interval tree.
//!
//! # Algorithm
//!
//! An AVL tree ordered by interval start, where every node also stores the
//! largest `end` in its subtree. An overlap query for `[lo, hi)` descends
//! a single path: go left whenever the left subtree's `max_end > lo`,
//! otherwise go right. If the left subtree holds no overlap even though
//! some interval there ends after `lo`, that interval must start at or
//! after `hi`, and so does everything to its right.
//!
//! Nodes live in a `Vec` arena and reference children by index; the tree
//! is append-only, so indices stay valid for its lifetime.
//!
//! # Complexity
//! Insert O(log n). `any_overlap` O(log n). `collect_overlapping` O(log n + k).
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 14.3 (Interval Trees)

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct Node {
    start: f64,
    end: f64,
    max_end: f64,
    height: i32,
    left: Option<usize>,
    right: Option<usize>,
}

/// Interval tree over half-open `[start, end)` ranges of one day.
#[derive(Debug, Clone, Default)]
pub(crate) struct IntervalTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl IntervalTree {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn insert(&mut self, start: f64, end: f64) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            start,
            end,
            max_end: end,
            height: 1,
            left: None,
            right: None,
        });
        let root = self.insert_at(self.root, idx);
        self.root = Some(root);
    }

    /// Whether any stored range intersects `[start, end)`.
    pub(crate) fn any_overlap(&self, start: f64, end: f64) -> bool {
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.nodes[i];
            if node.start < end && start < node.end {
                return true;
            }
            cur = match node.left {
                Some(l) if self.nodes[l].max_end > start => Some(l),
                _ => node.right,
            };
        }
        false
    }

    /// Appends every stored range intersecting `[start, end)`, in start order.
    pub(crate) fn collect_overlapping(&self, start: f64, end: f64, out: &mut Vec<(f64, f64)>) {
        self.collect_at(self.root, start, end, out);
    }

    fn collect_at(&self, node: Option<usize>, start: f64, end: f64, out: &mut Vec<(f64, f64)>) {
        let Some(i) = node else {
            return;
        };
        let n = &self.nodes[i];
        if n.max_end <= start {
            return;
        }
        self.collect_at(n.left, start, end, out);
        if n.start < end {
            if start < n.end {
                out.push((n.start, n.end));
            }
            self.collect_at(n.right, start, end, out);
        }
    }

    fn insert_at(&mut self, node: Option<usize>, new: usize) -> usize {
        let Some(n) = node else {
            return new;
        };
        // Equal starts go right so in-order stays non-decreasing.
        if self.nodes[new].start.total_cmp(&self.nodes[n].start) == Ordering::Less {
            let left = self.insert_at(self.nodes[n].left, new);
            self.nodes[n].left = Some(left);
        } else {
            let right = self.insert_at(self.nodes[n].right, new);
            self.nodes[n].right = Some(right);
        }
        self.rebalance(n)
    }

    fn height(&self, node: Option<usize>) -> i32 {
        node.map_or(0, |i| self.nodes[i].height)
    }

    fn max_end(&self, node: Option<usize>) -> f64 {
        node.map_or(f64::NEG_INFINITY, |i| self.nodes[i].max_end)
    }

    fn update(&mut self, n: usize) {
        let (left, right) = (self.nodes[n].left, self.nodes[n].right);
        let height = 1 + self.height(left).max(self.height(right));
        let max_end = self.nodes[n]
            .end
            .max(self.max_end(left))
            .max(self.max_end(right));
        let node = &mut self.nodes[n];
        node.height = height;
        node.max_end = max_end;
    }

    fn balance(&self, n: usize) -> i32 {
        self.height(self.nodes[n].left) - self.height(self.nodes[n].right)
    }

    fn rotate_right(&mut self, n: usize) -> usize {
        let Some(l) = self.nodes[n].left else {
            return n;
        };
        self.nodes[n].left = self.nodes[l].right;
        self.nodes[l].right = Some(n);
        self.update(n);
        self.update(l);
        l
    }

    fn rotate_left(&mut self, n: usize) -> usize {
        let Some(r) = self.nodes[n].right else {
            return n;
        };
        self.nodes[n].right = self.nodes[r].left;
        self.nodes[r].left = Some(n);
        self.update(n);
        self.update(r);
        r
    }

    fn rebalance(&mut self, n: usize) -> usize {
        self.update(n);
        let balance = self.balance(n);
        if balance > 1 {
            if let Some(l) = self.nodes[n].left {
                if self.balance(l) < 0 {
                    let new_left = self.rotate_left(l);
                    self.nodes[n].left = Some(new_left);
                }
            }
            return self.rotate_right(n);
        }
        if balance < -1 {
            if let Some(r) = self.nodes[n].right {
                if self.balance(r) > 0 {
                    let new_right = self.rotate_right(r);
                    self.nodes[n].right = Some(new_right);
                }
            }
            return self.rotate_left(n);
        }
        n
    }

    #[cfg(test)]
    fn root_height(&self) -> i32 {
        self.height(self.root)
    }
}
