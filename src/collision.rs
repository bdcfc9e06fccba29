//! Resolves overlaps between the character and the level geometry.
//!
//! Everything here runs in world space after the body has integrated for the
//! tick. Landing and bumping are told apart by the sign of the vertical
//! velocity rather than by sweeping the motion, so a body moving faster than a
//! block is thick can pass through it.

use macroquad::math::Rect;

use crate::body::CharacterBody;
use crate::geom::overlaps_x;
use crate::level::{CategorySet, LevelGeometry};

/// What the resolver did during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// The body ended the tick standing on ground.
    pub ground_contact: bool,
    /// The body landed on a platform or mystery block.
    pub platform_contact: bool,
    /// Mystery blocks knocked out this tick.
    pub broken: Vec<Rect>,
}

/// Run the enabled handlers in order: ground, platform top, platform bottom,
/// mystery bottom, mystery top.
///
/// Support flags are recomputed from this tick's contacts: `on_ground` drops
/// when the ground scan finds nothing, `on_platform` when neither a platform
/// nor a mystery block was landed on.
pub fn resolve(
    body: &mut CharacterBody,
    level: &mut LevelGeometry,
    enabled: CategorySet,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    if enabled.contains(CategorySet::GROUND) {
        report.ground_contact = land_on_ground(body, level.ground());
        if !report.ground_contact {
            body.on_ground = false;
        }
    }

    if enabled.contains(CategorySet::PLATFORM) {
        report.platform_contact |= land_on_platforms(body, level.platforms());
        bump_platforms(body, level.platforms());
    }

    if enabled.contains(CategorySet::MYSTERY) {
        report.broken = break_mystery_from_below(body, level);
        report.platform_contact |= land_on_mystery(body, level.mystery());
    }

    if !report.platform_contact {
        body.on_platform = false;
    }

    report
}

/// Snap a falling body onto any ground rectangle its bottom has reached.
pub fn land_on_ground(body: &mut CharacterBody, ground: &[Rect]) -> bool {
    let mut contact = false;
    for rect in ground {
        if !overlaps_x(&body.bounds(), rect) {
            continue;
        }
        if body.velocity_y >= 0.0 && body.bottom() >= rect.top() {
            body.y = rect.top() - body.height();
            body.velocity_y = 0.0;
            body.on_ground = true;
            contact = true;
        }
    }
    contact
}

/// Land on a platform whose top the body's bottom crossed this tick.
pub fn land_on_platforms(body: &mut CharacterBody, platforms: &[Rect]) -> bool {
    let mut contact = false;
    for rect in platforms {
        if !overlaps_x(&body.bounds(), rect) {
            continue;
        }
        let previous_bottom = body.bottom() - body.velocity_y;
        if body.bottom() >= rect.top() && previous_bottom <= rect.top() {
            body.y = rect.top() - body.height();
            body.velocity_y = 0.0;
            body.on_platform = true;
            contact = true;
        }
    }
    contact
}

/// Stop a rising body whose top crossed a platform's underside this tick.
pub fn bump_platforms(body: &mut CharacterBody, platforms: &[Rect]) {
    for rect in platforms {
        if !overlaps_x(&body.bounds(), rect) || body.velocity_y >= 0.0 {
            continue;
        }
        let previous_top = body.top() - body.velocity_y;
        if body.top() <= rect.bottom() && previous_top >= rect.bottom() {
            body.y = rect.bottom();
            body.velocity_y = 0.0;
        }
    }
}

/// Knock out mystery blocks hit from below while rising.
///
/// Scans in reverse index order so removal does not disturb the scan. The
/// body is pushed below the block and stops rising.
pub fn break_mystery_from_below(body: &mut CharacterBody, level: &mut LevelGeometry) -> Vec<Rect> {
    let mut broken = Vec::new();
    for i in (0..level.mystery().len()).rev() {
        let rect = level.mystery()[i];
        if !overlaps_x(&body.bounds(), &rect) {
            continue;
        }
        if body.velocity_y < 0.0 && body.top() < rect.bottom() && body.bottom() > rect.bottom() {
            body.y = rect.bottom();
            body.velocity_y = 0.0;
            broken.push(level.remove_mystery(i));
        }
    }
    broken
}

/// Stand on top of a mystery block. The body must straddle the block's top
/// edge, so a body underneath is not lifted onto it.
pub fn land_on_mystery(body: &mut CharacterBody, mystery: &[Rect]) -> bool {
    let mut contact = false;
    for rect in mystery {
        if !overlaps_x(&body.bounds(), rect) {
            continue;
        }
        if body.velocity_y >= 0.0 && body.bottom() >= rect.top() && body.top() < rect.top() {
            body.y = rect.top() - body.height();
            body.velocity_x = 0.0;
            body.velocity_y = 0.0;
            body.on_platform = true;
            contact = true;
        }
    }
    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32, vy: f32) -> CharacterBody {
        let mut body = CharacterBody::new(x, y, 32.0, 32.0);
        body.velocity_y = vy;
        body
    }

    fn level_with(ground: Vec<Rect>, platform: Vec<Rect>, mystery: Vec<Rect>) -> LevelGeometry {
        LevelGeometry::new(ground, platform, mystery)
    }

    #[test]
    fn falling_body_lands_on_ground() {
        let mut level = level_with(vec![Rect::new(200.0, 536.0, 64.0, 32.0)], vec![], vec![]);
        let mut body = body_at(210.0, 506.0, 3.0);

        let report = resolve(&mut body, &mut level, CategorySet::default());

        assert!(report.ground_contact);
        assert_eq!(body.y, 504.0);
        assert_eq!(body.velocity_y, 0.0);
        assert!(body.on_ground);
    }

    #[test]
    fn rising_body_passes_through_ground() {
        let mut level = level_with(vec![Rect::new(200.0, 536.0, 64.0, 32.0)], vec![], vec![]);
        let mut body = body_at(210.0, 520.0, -5.0);
        body.on_ground = true;

        resolve(&mut body, &mut level, CategorySet::default());

        assert_eq!(body.y, 520.0);
        assert!(!body.on_ground);
    }

    #[test]
    fn no_horizontal_overlap_no_contact() {
        let mut level = level_with(vec![Rect::new(200.0, 536.0, 64.0, 32.0)], vec![], vec![]);
        let mut body = body_at(264.0, 510.0, 1.0);
        body.on_ground = true;

        let report = resolve(&mut body, &mut level, CategorySet::default());

        assert!(!report.ground_contact);
        assert!(!body.on_ground);
        assert_eq!(body.y, 510.0);
    }

    #[test]
    fn mystery_hit_from_below_is_removed_once() {
        let block = Rect::new(512.0, 408.0, 32.0, 32.0);
        let mut level = level_with(vec![], vec![], vec![block]);
        let mut body = body_at(515.0, 430.0, -6.0);

        let report = resolve(&mut body, &mut level, CategorySet::default());
        assert_eq!(report.broken, vec![block]);
        assert!(level.mystery().is_empty());
        assert_eq!(body.y, 440.0);
        assert_eq!(body.velocity_y, 0.0);

        let mut again = body_at(515.0, 430.0, -6.0);
        let report = resolve(&mut again, &mut level, CategorySet::default());
        assert!(report.broken.is_empty());
        assert_eq!(again.y, 430.0);
    }

    #[test]
    fn removal_keeps_other_blocks_in_order() {
        let a = Rect::new(0.0, 408.0, 32.0, 32.0);
        let hit = Rect::new(512.0, 408.0, 32.0, 32.0);
        let c = Rect::new(1024.0, 408.0, 32.0, 32.0);
        let mut level = level_with(vec![], vec![], vec![a, hit, c]);
        let mut body = body_at(515.0, 430.0, -6.0);

        resolve(&mut body, &mut level, CategorySet::default());

        assert_eq!(level.mystery(), &[a, c]);
    }

    #[test]
    fn landing_on_mystery_stops_body_and_keeps_block() {
        let block = Rect::new(512.0, 408.0, 32.0, 32.0);
        let mut level = level_with(vec![], vec![], vec![block]);
        let mut body = body_at(520.0, 380.0, 2.0);
        body.velocity_x = 2.0;

        let report = resolve(&mut body, &mut level, CategorySet::default());

        assert!(report.platform_contact);
        assert!(body.on_platform);
        assert_eq!(body.y, 376.0);
        assert_eq!(body.velocity_x, 0.0);
        assert_eq!(level.mystery().len(), 1);
    }

    #[test]
    fn body_below_mystery_block_is_not_lifted() {
        let block = Rect::new(512.0, 408.0, 32.0, 32.0);
        let ground = Rect::new(0.0, 536.0, 2000.0, 64.0);
        let mut level = level_with(vec![ground], vec![], vec![block]);
        let mut body = body_at(515.0, 504.3, 0.3);

        resolve(&mut body, &mut level, CategorySet::default());

        assert_eq!(body.y, 504.0);
        assert!(body.on_ground);
        assert!(!body.on_platform);
    }

    #[test]
    fn walking_off_mystery_block_drops_platform_support() {
        let block = Rect::new(512.0, 408.0, 32.0, 32.0);
        let mut level = level_with(vec![], vec![], vec![block]);
        let mut body = body_at(560.0, 376.3, 0.3);
        body.on_platform = true;

        resolve(&mut body, &mut level, CategorySet::default());

        assert!(!body.on_platform);
    }

    #[test]
    fn platforms_are_ignored_unless_enabled() {
        let ledge = Rect::new(300.0, 400.0, 64.0, 32.0);
        let mut level = level_with(vec![], vec![ledge], vec![]);
        let mut body = body_at(310.0, 370.0, 3.0);

        resolve(&mut body, &mut level, CategorySet::default());
        assert_eq!(body.y, 370.0);
        assert!(!body.on_platform);

        let enabled = CategorySet::default() | CategorySet::PLATFORM;
        let report = resolve(&mut body, &mut level, enabled);
        assert!(report.platform_contact);
        assert_eq!(body.y, 368.0);
        assert!(body.on_platform);
    }

    #[test]
    fn platform_landing_needs_a_crossing_this_tick() {
        let ledge = Rect::new(300.0, 400.0, 64.0, 32.0);
        let mut level = level_with(vec![], vec![ledge], vec![]);
        // Bottom already well below the top before this tick's motion.
        let mut body = body_at(310.0, 390.0, 3.0);

        let enabled = CategorySet::default() | CategorySet::PLATFORM;
        let report = resolve(&mut body, &mut level, enabled);

        assert!(!report.platform_contact);
        assert_eq!(body.y, 390.0);
    }

    #[test]
    fn rising_body_bumps_platform_underside() {
        let ledge = Rect::new(300.0, 400.0, 64.0, 32.0);
        let mut level = level_with(vec![], vec![ledge], vec![]);
        let mut body = body_at(310.0, 428.0, -6.0);

        let enabled = CategorySet::default() | CategorySet::PLATFORM;
        resolve(&mut body, &mut level, enabled);

        assert_eq!(body.y, 432.0);
        assert_eq!(body.velocity_y, 0.0);
        assert_eq!(level.platforms().len(), 1);
    }
}
