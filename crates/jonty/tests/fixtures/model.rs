// Model scanned by the build script generator, included by `tests/registered.rs`
// as `registered::model`.

use jonty::Class;

#[derive(Class)]
#[jonty(fieldable)]
pub struct Point {
    pub y: i32,
    pub x: i32,
}

#[derive(Class)]
#[jonty(extends = Point)]
pub struct Point3 {
    pub z: i32,
}

pub mod shapes {
    use jonty::Class;

    #[derive(Class)]
    #[jonty(fieldable)]
    pub struct Point {
        pub theta: f64,
        pub r: f64,
    }
}
