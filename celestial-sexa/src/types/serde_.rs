use super::{Angle, HourAngle, RightAscension, Time};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! impl_serde_f64 {
    ($ty:ty, $get:ident, $make:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_f64(self.$get())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let raw = f64::deserialize(d)?;
                Ok(<$ty>::$make(raw))
            }
        }
    };
}

impl_serde_f64!(Angle, radians, from_radians);
impl_serde_f64!(HourAngle, radians, from_radians);
impl_serde_f64!(RightAscension, radians, from_radians);
impl_serde_f64!(Time, seconds, from_seconds);
