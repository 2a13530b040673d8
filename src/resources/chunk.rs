//! Tile collision map loaded from a plain-text grid.
//!
//! A [`Chunk`] parses a `width` x `height` character grid (`#` = solid,
//! anything else = empty) into one axis-aligned [`CollisionBox`] per solid
//! tile, stored sparsely by cell index. It is loaded exactly once during
//! scene setup, before the frame loop starts, and only queried afterward.
//!
//! The grid file is described by a JSON [`ChunkDescriptor`] next to it,
//! mirroring how tilemaps ship as a data file plus descriptor.
//!
//! # Grid format
//!
//! One line per row, no header, no escaping:
//!
//! ```text
//! ########
//! #......#
//! ########
//! ```
//!
//! Lines or rows shorter than the declared dimensions are treated as empty
//! cells and logged once as a warning.

use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Axis-aligned box described by its center and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionBox {
    pub center: Vector2,
    pub size: Vector2,
}

impl CollisionBox {
    pub fn new(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vector2 { x: cx, y: cy },
            size: Vector2 {
                x: width,
                y: height,
            },
        }
    }

    /// `(min, max)` corners of the box.
    pub fn bounds(&self) -> (Vector2, Vector2) {
        let half = Vector2 {
            x: self.size.x / 2.0,
            y: self.size.y / 2.0,
        };
        (self.center - half, self.center + half)
    }

    /// Strict AABB overlap test: the projections must overlap on both axes
    /// with open inequalities, so boxes touching edge-to-edge do NOT count
    /// as overlapping. Symmetric in its arguments.
    pub fn overlaps(&self, other: &CollisionBox) -> bool {
        let (min_a, max_a) = self.bounds();
        let (min_b, max_b) = other.bounds();
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Closest point of the box (surface or interior) to `point`: the
    /// componentwise clamp of `point` into the box.
    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        let (min, max) = self.bounds();
        Vector2 {
            x: point.x.clamp(min.x, max.x),
            y: point.y.clamp(min.y, max.y),
        }
    }
}

/// JSON descriptor naming a grid file and its declared dimensions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkDescriptor {
    pub name: String,
    /// Grid file, relative to the descriptor's directory.
    pub source: String,
    pub width: usize,
    pub height: usize,
    pub tile_size: f32,
}

/// Sparse tile collision map; immutable once constructed.
#[derive(Debug, Clone)]
pub struct Chunk {
    width: usize,
    height: usize,
    tile_size: f32,
    /// One box per solid tile, keyed by `row * width + col`.
    cells: FxHashMap<usize, CollisionBox>,
}

impl Chunk {
    /// Parse a text grid. Short lines and missing rows read as empty.
    pub fn parse(data: &str, width: usize, height: usize, tile_size: f32) -> Chunk {
        let mut cells = FxHashMap::default();
        let mut truncated = false;
        let mut lines = data.lines();
        for row in 0..height {
            let line = lines.next().unwrap_or_else(|| {
                truncated = true;
                ""
            });
            let mut chars = line.chars();
            for col in 0..width {
                let solid = match chars.next() {
                    Some(c) => c == '#',
                    None => {
                        truncated = true;
                        false
                    }
                };
                if solid {
                    let x = (col as f32 + 0.5) * tile_size;
                    let y = (row as f32 + 0.5) * tile_size;
                    cells.insert(
                        row * width + col,
                        CollisionBox::new(x, y, tile_size, tile_size),
                    );
                }
            }
        }
        if truncated {
            log::warn!(
                "chunk grid smaller than declared {}x{}; missing cells read as empty",
                width,
                height
            );
        }
        Chunk {
            width,
            height,
            tile_size,
            cells,
        }
    }

    /// Load the descriptor's grid file and parse it.
    pub fn load(descriptor: &ChunkDescriptor, base_dir: &Path) -> Result<Chunk, String> {
        let path = base_dir.join(&descriptor.source);
        let data = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read chunk grid {:?}: {}", path, e))?;
        Ok(Chunk::parse(
            &data,
            descriptor.width,
            descriptor.height,
            descriptor.tile_size,
        ))
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Grid dimensions in tiles.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn solid_count(&self) -> usize {
        self.cells.len()
    }

    /// All solid-tile boxes, in no particular order. Used for drawing.
    pub fn boxes(&self) -> impl Iterator<Item = &CollisionBox> {
        self.cells.values()
    }

    /// Spatial range query: every solid-tile box that strictly overlaps the
    /// `width` x `height` box centered at `(x, y)`, in world units.
    ///
    /// Only the tiles whose cells the query box covers are visited, so the
    /// cost is bounded by the query footprint rather than the grid size.
    pub fn collision_objects(&self, x: f32, y: f32, width: f32, height: f32) -> Vec<CollisionBox> {
        let query = CollisionBox::new(x, y, width, height);
        let (min, max) = query.bounds();

        let col_lo = (min.x / self.tile_size).floor().max(0.0) as usize;
        let row_lo = (min.y / self.tile_size).floor().max(0.0) as usize;
        if min.x / self.tile_size >= self.width as f32
            || min.y / self.tile_size >= self.height as f32
            || max.x < 0.0
            || max.y < 0.0
        {
            return Vec::new();
        }
        let col_hi = ((max.x / self.tile_size).floor() as usize).min(self.width - 1);
        let row_hi = ((max.y / self.tile_size).floor() as usize).min(self.height - 1);

        let mut found = Vec::new();
        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                if let Some(tile) = self.cells.get(&(row * self.width + col)) {
                    if tile.overlaps(&query) {
                        found.push(*tile);
                    }
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: f32 = 0.25;

    fn grid() -> Chunk {
        // 4x4 grid with solid tiles at (row 1, col 1) and (row 2, col 3).
        let data = "....\n.#..\n...#\n....";
        Chunk::parse(data, 4, 4, TILE)
    }

    #[test]
    fn parse_counts_solid_tiles() {
        let chunk = grid();
        assert_eq!(chunk.solid_count(), 2);
        assert_eq!(chunk.dimensions(), (4, 4));
    }

    #[test]
    fn parse_tolerates_short_grids() {
        let chunk = Chunk::parse("##", 4, 4, TILE);
        assert_eq!(chunk.solid_count(), 2);
        let empty = Chunk::parse("", 4, 4, TILE);
        assert_eq!(empty.solid_count(), 0);
    }

    #[test]
    fn query_containing_a_tile_finds_exactly_it() {
        let chunk = grid();
        // Tile (row 1, col 1) is centered at (1.5, 1.5) * TILE.
        let found = chunk.collision_objects(1.5 * TILE, 1.5 * TILE, 2.0 * TILE, 2.0 * TILE);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0],
            CollisionBox::new(1.5 * TILE, 1.5 * TILE, TILE, TILE)
        );
    }

    #[test]
    fn query_away_from_tiles_is_empty() {
        let chunk = grid();
        let found = chunk.collision_objects(0.5 * TILE, 0.5 * TILE, TILE * 0.5, TILE * 0.5);
        assert!(found.is_empty());
    }

    #[test]
    fn query_outside_the_grid_is_empty() {
        let chunk = grid();
        assert!(chunk.collision_objects(-10.0, -10.0, 1.0, 1.0).is_empty());
        assert!(chunk.collision_objects(10.0, 10.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = CollisionBox::new(0.0, 0.0, 2.0, 2.0);
        let b = CollisionBox::new(1.0, 1.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = CollisionBox::new(0.0, 0.0, 2.0, 2.0);
        // Exactly edge-to-edge on the x axis.
        let b = CollisionBox::new(2.0, 0.0, 2.0, 2.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        // Corner-to-corner.
        let c = CollisionBox::new(2.0, 2.0, 2.0, 2.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn edge_contact_with_query_box_is_excluded() {
        let chunk = grid();
        // Query box whose right edge exactly touches the left edge of the
        // tile at (row 1, col 1): tile spans x in [TILE, 2*TILE].
        let found = chunk.collision_objects(0.5 * TILE, 1.5 * TILE, TILE, TILE);
        assert!(found.is_empty());
    }

    #[test]
    fn closest_point_clamps_into_the_box() {
        let b = CollisionBox::new(0.0, 0.0, 2.0, 2.0);
        let p = b.closest_point(Vector2 { x: 5.0, y: 0.5 });
        assert_eq!(p, Vector2 { x: 1.0, y: 0.5 });
        // A point inside the box maps to itself.
        let inside = Vector2 { x: 0.25, y: -0.25 };
        assert_eq!(b.closest_point(inside), inside);
    }
}
