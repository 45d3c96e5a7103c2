//! Collision resolver
//!
//! Axis-aligned box tests over the bullet and alien collections. All
//! removal is by filtering (`retain`), never in-place mutation while a
//! collection is being iterated.

use super::state::{Alien, Bullet, Ship};

/// Batched bullet-alien query: any overlapping pair removes both the bullet
/// and the alien. A single bullet overlapping several aliens removes all of
/// them in one query. Returns the number of aliens destroyed so the caller
/// can award `alien_points` per kill.
pub fn resolve_bullet_alien(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> u32 {
    let mut destroyed: u32 = 0;
    bullets.retain(|bullet| {
        let bullet_rect = bullet.body.rect();
        let before = aliens.len();
        aliens.retain(|alien| !bullet_rect.intersects(&alien.body.rect()));
        let hits = (before - aliens.len()) as u32;
        destroyed += hits;
        hits == 0
    });
    destroyed
}

/// Does the ship's box overlap any alien's box?
pub fn ship_struck(ship: &Ship, aliens: &[Alien]) -> bool {
    let ship_rect = ship.body.rect();
    aliens
        .iter()
        .any(|alien| ship_rect.intersects(&alien.body.rect()))
}

/// Has any alien reached the bottom of the screen? Short-circuits on the
/// first match; treated by the caller exactly like a ship collision.
pub fn fleet_reached_bottom(aliens: &[Alien], screen_height: i32) -> bool {
    aliens
        .iter()
        .any(|alien| alien.body.rect().bottom() >= screen_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Body;

    fn alien_at(x: f32, y: f32, settings: &Settings) -> Alien {
        Alien::new(x, y, settings)
    }

    fn bullet_at(x: f32, y: f32, settings: &Settings) -> Bullet {
        let ship = Ship::new(settings);
        let mut bullet = Bullet::new(&ship, settings);
        bullet.body.pos = glam::Vec2::new(x, y);
        bullet
    }

    #[test]
    fn test_hit_removes_bullet_and_alien() {
        let settings = Settings::default();
        let mut aliens = vec![alien_at(100.0, 100.0, &settings)];
        let mut bullets = vec![bullet_at(110.0, 110.0, &settings)];

        let destroyed = resolve_bullet_alien(&mut bullets, &mut aliens);

        assert_eq!(destroyed, 1);
        assert!(bullets.is_empty());
        assert!(aliens.is_empty());
    }

    #[test]
    fn test_one_bullet_can_destroy_two_adjacent_aliens() {
        let settings = Settings::default();
        // Two aliens side by side; a bullet straddling their seam
        let mut aliens = vec![
            alien_at(100.0, 100.0, &settings),
            alien_at((100 + settings.alien_width) as f32, 100.0, &settings),
        ];
        let seam_x = (100 + settings.alien_width) as f32 - settings.bullet_width as f32 / 2.0;
        let mut bullets = vec![bullet_at(seam_x, 110.0, &settings)];

        let destroyed = resolve_bullet_alien(&mut bullets, &mut aliens);

        assert_eq!(destroyed, 2);
        assert!(aliens.is_empty());
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_miss_leaves_everything_alone() {
        let settings = Settings::default();
        let mut aliens = vec![alien_at(100.0, 100.0, &settings)];
        let mut bullets = vec![bullet_at(600.0, 600.0, &settings)];

        let destroyed = resolve_bullet_alien(&mut bullets, &mut aliens);

        assert_eq!(destroyed, 0);
        assert_eq!(bullets.len(), 1);
        assert_eq!(aliens.len(), 1);
    }

    #[test]
    fn test_each_bullet_resolves_against_remaining_aliens() {
        let settings = Settings::default();
        // Two bullets aimed at the same alien: the first removes it, the
        // second survives with nothing left to hit.
        let mut aliens = vec![alien_at(100.0, 100.0, &settings)];
        let mut bullets = vec![
            bullet_at(110.0, 110.0, &settings),
            bullet_at(110.0, 120.0, &settings),
        ];

        let destroyed = resolve_bullet_alien(&mut bullets, &mut aliens);

        assert_eq!(destroyed, 1);
        assert_eq!(bullets.len(), 1);
        assert!(aliens.is_empty());
    }

    #[test]
    fn test_ship_struck() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        let ship_rect = ship.body.rect();

        let far = vec![alien_at(0.0, 0.0, &settings)];
        assert!(!ship_struck(&ship, &far));

        let overlapping = vec![alien_at(
            ship_rect.x as f32,
            (ship_rect.y - settings.alien_height / 2) as f32,
            &settings,
        )];
        assert!(ship_struck(&ship, &overlapping));
    }

    #[test]
    fn test_fleet_reached_bottom() {
        let settings = Settings::default();
        let high = vec![alien_at(100.0, 100.0, &settings)];
        assert!(!fleet_reached_bottom(&high, settings.screen_height));

        // Bottom edge exactly at the screen edge counts
        let touching = vec![Alien {
            body: Body::new(
                100.0,
                (settings.screen_height - settings.alien_height) as f32,
                settings.alien_width,
                settings.alien_height,
            ),
        }];
        assert!(fleet_reached_bottom(&touching, settings.screen_height));
    }
}
