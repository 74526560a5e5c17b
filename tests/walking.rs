// tests/walking.rs
use approx::assert_relative_eq;
use biped_commander::{Command, MotionConfig, Point, Robot, distance_between};
use std::f64::consts::{FRAC_PI_2, PI};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

const EPSILON: f64 = 0.001;

// Collects formatted log lines so tests can assert on emitted events.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_one_metre_east() {
    let mut robot = Robot::default();

    // Origin, facing 0. 1 m at 0.1 m per step = 10 steps.
    let steps = robot.move_to(Point::new(1.0, 0.0));

    assert_eq!(steps, 10);
    assert_relative_eq!(robot.position().x, 1.0, epsilon = EPSILON);
    assert_relative_eq!(robot.position().y, 0.0, epsilon = EPSILON);
    assert_relative_eq!(robot.facing(), 0.0);
}

#[test]
fn test_repeat_move_stays_put() {
    let mut robot = Robot::default();
    let target = Point::new(-2.3, 4.1);

    robot.move_to(target);
    assert!(distance_between(robot.position(), target) < EPSILON);

    // Already there: no steps, still within tolerance.
    assert_eq!(robot.move_to(target), 0);
    assert!(distance_between(robot.position(), target) < EPSILON);
}

#[test]
fn test_converges_in_every_direction() {
    let config = MotionConfig::default();

    for i in 0..16 {
        let angle = i as f64 * PI / 8.0;
        let distance = 0.37 + i as f64 * 0.61;
        let target = Point::new(distance * angle.cos(), distance * angle.sin());

        let mut robot = Robot::new(config.clone()).unwrap();
        let steps = robot.move_to(target);

        assert!(robot.is_at(target), "did not reach {target:?}");
        let bound = (distance / config.step_size).ceil() as usize + 1;
        assert!(steps <= bound, "{steps} steps to {target:?}, bound {bound}");
    }
}

#[test]
fn test_custom_step_and_tolerance() {
    let config = MotionConfig::default()
        .with_step_size(0.25)
        .with_epsilon_distance(1e-6);
    let mut robot = Robot::new(config).unwrap().with_pose(Point::new(1.0, 1.0), 0.0);

    let steps = robot.move_to(Point::new(1.0, 2.0));

    assert_eq!(steps, 4);
    assert_relative_eq!(robot.facing(), FRAC_PI_2);
    assert!(distance_between(robot.position(), Point::new(1.0, 2.0)) < 1e-6);
}

#[test]
fn test_lift_in_place() {
    let mut robot = Robot::default();

    robot.execute(&Command::Lift(Point::ZERO));

    // Bend to pi/2 then straighten to pi: pi radians of travel per knee.
    assert_eq!(robot.position(), Point::ZERO);
    assert_eq!(robot.left_leg().knee.angle, PI);
    assert_eq!(robot.right_leg().knee.angle, PI);
    assert_relative_eq!(robot.left_leg().knee.travel(), PI);
    assert_relative_eq!(robot.right_leg().knee.travel(), PI);
}

#[test]
fn test_speak_hi() {
    let mut robot = Robot::default().with_pose(Point::new(3.0, -1.0), 0.75);
    let before = robot.pose();

    let log = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || robot.speak("hi"));

    // The speaker announces the message through the log.
    assert!(log.text().contains("Message played over the speaker: hi"));
    assert_eq!(robot.speaker().played(), ["hi"]);
    assert_eq!(robot.pose(), before);
}

#[test]
fn test_unreachable_epsilon_rejected() {
    // A tolerance below float resolution would leave the walk overshooting forever.
    let config = MotionConfig::default().with_epsilon_distance(1e-18);
    assert!(Robot::new(config).is_err());
}
