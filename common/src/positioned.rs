/// Read access to an element's 2D position and collision extent (radius).
///
/// Values only need to be stable for the duration of one query or one tick;
/// an index built from them is not notified when they change.
pub trait Positioned {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn extent(&self) -> f64;
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }

    fn extent(&self) -> f64 {
        (**self).extent()
    }
}
