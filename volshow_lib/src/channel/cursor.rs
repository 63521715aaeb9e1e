use nalgebra::{vector, Vector3};

/// Visits every coordinate of a grid exactly once, in storage order.
/// The fastest growing axis is Z.
#[derive(Debug)]
pub struct CoordIterator {
    dims: Vector3<usize>,
    state: Vector3<usize>,
    done: bool,
    started: bool,
}

impl CoordIterator {
    pub fn from_dims(dims: Vector3<usize>) -> CoordIterator {
        CoordIterator {
            dims,
            state: vector![0, 0, 0],
            done: dims.x == 0 || dims.y == 0 || dims.z == 0,
            started: false,
        }
    }
}

impl Iterator for CoordIterator {
    type Item = Vector3<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.state);
        }
        self.state.z += 1;
        if self.state.z == self.dims.z {
            self.state.z = 0;
            self.state.y += 1;
        }
        if self.state.y == self.dims.y {
            self.state.y = 0;
            self.state.x += 1;
        }
        if self.state.x == self.dims.x {
            self.state.x = 0;
            self.done = true;
            return None;
        }

        Some(self.state)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn storage_order() {
        let cursor = CoordIterator::from_dims(vector![2, 3, 4]);

        #[rustfmt::skip]
        let expected = &[
            vector![0,0,0],vector![0,0,1],vector![0,0,2],vector![0,0,3],
            vector![0,1,0],vector![0,1,1],vector![0,1,2],vector![0,1,3],
            vector![0,2,0],vector![0,2,1],vector![0,2,2],vector![0,2,3],
            // next slice
            vector![1,0,0],vector![1,0,1],vector![1,0,2],vector![1,0,3],
            vector![1,1,0],vector![1,1,1],vector![1,1,2],vector![1,1,3],
            vector![1,2,0],vector![1,2,1],vector![1,2,2],vector![1,2,3],
        ];

        let collected: Vec<_> = cursor.collect();

        assert_eq!(collected.len(), 2 * 3 * 4);
        assert_eq!(collected.len(), expected.len());

        collected
            .iter()
            .zip(expected.iter())
            .for_each(|(act, exp)| assert_eq!(act, exp));
    }

    #[test]
    fn empty_grid() {
        let cursor = CoordIterator::from_dims(vector![2, 0, 4]);
        assert_eq!(cursor.count(), 0);
    }

    #[test]
    fn single_cell() {
        let collected: Vec<_> = CoordIterator::from_dims(vector![1, 1, 1]).collect();
        assert_eq!(collected, vec![vector![0, 0, 0]]);
    }
}
