use ndarray::Array2;

use crate::ops::{Circle, Complex};

/// 탐색이 내보내는 값
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Emission {
    Point(Complex),
    Circle(Circle),
}

/// 탐색 결과를 받는 쪽 (렌더러 등)
pub trait Sink {
    fn emit(&mut self, emission: Emission);
}

impl Sink for Vec<Emission> {
    fn emit(&mut self, emission: Emission) {
        self.push(emission);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, emission: Emission) {
        (**self).emit(emission);
    }
}

/// 점과 원을 따로 모으는 싱크. `ndarray` 배열로 내보낼 수 있다.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    pub points: Vec<Complex>,
    pub circles: Vec<Circle>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len() + self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// [n, 2] 배열 (re, im)
    pub fn points_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.points.len(), 2), |(i, j)| {
            let p = self.points[i];
            if j == 0 {
                p.re
            } else {
                p.im
            }
        })
    }

    /// [n, 3] 배열 (center.re, center.im, radius)
    pub fn circles_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.circles.len(), 3), |(i, j)| {
            let c = self.circles[i];
            match j {
                0 => c.center.re,
                1 => c.center.im,
                _ => c.radius,
            }
        })
    }
}

impl Sink for Collector {
    fn emit(&mut self, emission: Emission) {
        match emission {
            Emission::Point(z) => self.points.push(z),
            Emission::Circle(c) => self.circles.push(c),
        }
    }
}
