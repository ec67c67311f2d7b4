//! Collision detection between the player and field hazards
//!
//! Everything in the field is axis-aligned, so the checks reduce to
//! rectangle overlap plus a scalar test against the ground line. Queries
//! only; the controller decides what a hit means.

use super::rect::Rect;
use super::state::Obstacle;

/// True if the player's box overlaps any active obstacle.
pub fn hits_obstacle(player: &Rect, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| player.intersects(&o.rect))
}

/// True if the player's bottom edge has reached the ground line.
pub fn hits_ground(player: &Rect, ground_line: f32) -> bool {
    player.bottom() >= ground_line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(x: f32, y: f32, w: f32, h: f32) -> Obstacle {
        Obstacle {
            rect: Rect::new(x, y, w, h),
            is_top: true,
            scored: false,
        }
    }

    #[test]
    fn test_hits_obstacle_on_overlap() {
        let player = Rect::new(50.0, 100.0, 30.0, 30.0);
        let clear = [obstacle(200.0, 0.0, 60.0, 150.0)];
        assert!(!hits_obstacle(&player, &clear));

        let blocking = [
            obstacle(200.0, 0.0, 60.0, 150.0),
            obstacle(60.0, 90.0, 60.0, 150.0),
        ];
        assert!(hits_obstacle(&player, &blocking));
    }

    #[test]
    fn test_hits_obstacle_empty_set() {
        let player = Rect::new(50.0, 100.0, 30.0, 30.0);
        assert!(!hits_obstacle(&player, &[]));
    }

    #[test]
    fn test_hits_ground_at_and_below_line() {
        let ground_line = 550.0;
        let above = Rect::new(50.0, 500.0, 30.0, 30.0);
        assert!(!hits_ground(&above, ground_line));

        // Exactly touching counts
        let touching = Rect::new(50.0, 520.0, 30.0, 30.0);
        assert!(hits_ground(&touching, ground_line));

        let overshot = Rect::new(50.0, 540.0, 30.0, 30.0);
        assert!(hits_ground(&overshot, ground_line));
    }
}
