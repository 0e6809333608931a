use behavior_tree::Status;
use zombie::geometry::PIXEL_PER_METER;
use zombie::subtrees::{ARRIVAL_RADIUS, DETECTION_RADIUS, SAFE_DISTANCE};
use zombie::{Boy, Point, Zombie, presets};

const DT: f32 = 1.0 / 60.0;

/// Updates `zombie` until its tree reports something other than `Running`.
fn run_until_done(zombie: &mut Zombie, boy: &Boy, max_frames: usize) -> (Status, usize) {
    for frame in 1..=max_frames {
        let status = zombie.update(boy, DT);
        if status != Status::Running {
            return (status, frame);
        }
    }
    panic!("tree still running after {max_frames} frames");
}

#[test]
fn stronger_zombie_catches_nearby_boy() {
    let boy = Boy::new(Point::new(200.0, 100.0), 0);
    let mut zombie = Zombie::with_default_brain(0, Some(Point::new(100.0, 100.0))).unwrap();

    let (status, _) = run_until_done(&mut zombie, &boy, 200);

    assert_eq!(status, Status::Success);
    let gap = zombie.body().position.distance(boy.position);
    assert!(gap < ARRIVAL_RADIUS * PIXEL_PER_METER);
}

#[test]
fn weaker_zombie_flees_out_of_range() {
    let boy = Boy::new(Point::new(150.0, 100.0), 5);
    let start = Point::new(100.0, 100.0);
    let mut zombie = Zombie::with_default_brain(0, Some(start)).unwrap();

    assert_eq!(zombie.update(&boy, DT), Status::Running);
    assert!(zombie.body().position.x < start.x, "zombie moved toward the boy");

    let (status, _) = run_until_done(&mut zombie, &boy, 400);

    assert_eq!(status, Status::Success);
    let gap = zombie.body().position.distance(boy.position);
    assert!(gap >= SAFE_DISTANCE * PIXEL_PER_METER);
}

#[test]
fn distant_boy_is_ignored() {
    let boy = Boy::new(Point::new(1180.0, 900.0), 0);
    let mut zombie = Zombie::with_default_brain(3, Some(Point::new(100.0, 100.0))).unwrap();

    zombie.update(&boy, DT);

    let tree = zombie.brain();
    let react = tree.find("react to nearby boy").unwrap();
    let wander = tree.find("wander").unwrap();
    assert_eq!(tree.cursor(react), Some(0));
    assert_eq!(tree.cursor(wander), Some(1), "wander should be walking");
    assert!(zombie.body().position.distance(boy.position) > DETECTION_RADIUS * PIXEL_PER_METER);
}

#[test]
fn wander_target_is_kept_until_reached() {
    let boy = Boy::new(Point::new(1180.0, 900.0), 0);
    let mut zombie = Zombie::with_default_brain(11, Some(Point::new(640.0, 400.0))).unwrap();

    zombie.update(&boy, DT);
    let target = zombie.body().target;

    for _ in 0..10 {
        if zombie.update(&boy, DT) != Status::Running {
            break;
        }
        assert_eq!(zombie.body().target, target);
    }
}

#[test]
fn chase_is_not_rechecked_while_running() {
    // Once the chase has started, strength is not re-evaluated until the
    // chase terminates.
    let mut boy = Boy::new(Point::new(200.0, 100.0), 0);
    let mut zombie = Zombie::with_default_brain(0, Some(Point::new(100.0, 100.0))).unwrap();

    assert_eq!(zombie.update(&boy, DT), Status::Running);
    let before = zombie.body().position.distance(boy.position);

    boy.ball_count = 10;
    assert_eq!(zombie.update(&boy, DT), Status::Running);
    assert!(zombie.body().position.distance(boy.position) < before);
}

#[test]
fn patroller_visits_waypoints_in_order() {
    let boy = Boy::default();
    let route = zombie::body::PATROL_ROUTE;
    let mut zombie = Zombie::new(0, Some(route[0]), presets::patroller()).unwrap();

    // Standing on the first waypoint: the first leg finishes immediately
    assert_eq!(zombie.update(&boy, DT), Status::Success);
    assert_eq!(zombie.body().target, route[0]);

    assert_eq!(zombie.update(&boy, DT), Status::Running);
    assert_eq!(zombie.body().target, route[1]);
    assert_eq!(zombie.body().patrol_cursor(), 2);
}

#[test]
fn chaser_ignores_strength() {
    let boy = Boy::new(Point::new(200.0, 100.0), 99);
    let mut zombie = Zombie::new(0, Some(Point::new(100.0, 100.0)), presets::chaser()).unwrap();

    let (status, _) = run_until_done(&mut zombie, &boy, 200);
    assert_eq!(status, Status::Success);
    assert!(zombie.body().position.distance(boy.position) < ARRIVAL_RADIUS * PIXEL_PER_METER);
}

#[test]
fn patroller_finishes_legs_with_long_frames() {
    let boy = Boy::default();
    let route = zombie::body::PATROL_ROUTE;
    let mut zombie = Zombie::new(0, Some(route[0]), presets::patroller()).unwrap();

    // One second per frame covers ~92 px, far more than the arrival radius
    let mut finished = 0;
    for _ in 0..100 {
        if zombie.update(&boy, 1.0) == Status::Success {
            finished += 1;
            assert!(zombie.body().position.distance(zombie.body().target) < 1e-2);
        }
    }
    assert!(finished >= 3, "only {finished} legs finished");
}
