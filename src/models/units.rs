//! Fixed-point storage adapters.
//!
//! Monetary columns persist as integer centavos, room dimensions as integer
//! centimetres and route distances as integer metres, so SQL SUMs stay exact.
//! JSON carries the decimal units the frontend expects (reais, metres,
//! kilometres); conversion happens only at the serde boundary.

/// Convert a decimal amount in reais to integer centavos, rounding half away
/// from zero (`100.505` → `10051`).
pub fn to_centavos(reais: f64) -> i64 {
    (reais * 100.0).round() as i64
}

pub fn to_reais(centavos: i64) -> f64 {
    centavos as f64 / 100.0
}

/// Metres to integer centimetres, for room dimension columns.
pub fn to_centimetros(metros: f64) -> i64 {
    (metros * 100.0).round() as i64
}

/// Kilometres to integer metres, for route distance columns.
pub fn to_metros(quilometros: f64) -> i64 {
    (quilometros * 1000.0).round() as i64
}

/// serde adapter for NOT NULL centavo columns carried as reais.
pub mod reais {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(centavos: &i64, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_f64(super::to_reais(*centavos))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
        Ok(super::to_centavos(f64::deserialize(de)?))
    }
}

/// serde adapter for nullable centavo columns carried as reais.
pub mod reais_opt {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(centavos: &Option<i64>, ser: S) -> Result<S::Ok, S::Error> {
        centavos.map(super::to_reais).serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
        Ok(Option::<f64>::deserialize(de)?.map(super::to_centavos))
    }
}

/// serde adapter for nullable centimetre columns carried as metres.
pub mod metros_opt {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(cm: &Option<i64>, ser: S) -> Result<S::Ok, S::Error> {
        cm.map(|v| v as f64 / 100.0).serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
        Ok(Option::<f64>::deserialize(de)?.map(super::to_centimetros))
    }
}

/// serde adapter for nullable metre columns carried as kilometres.
pub mod quilometros_opt {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(metros: &Option<i64>, ser: S) -> Result<S::Ok, S::Error> {
        metros.map(|v| v as f64 / 1000.0).serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
        Ok(Option::<f64>::deserialize(de)?.map(super::to_metros))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centavos_round_trip_is_exact() {
        assert_eq!(to_centavos(100.50), 10050);
        assert_eq!(to_centavos(50.25), 5025);
        assert_eq!(to_reais(10050 + 5025), 150.75);
    }

    #[test]
    fn centavos_rounds_fractions() {
        assert_eq!(to_centavos(0.1 + 0.2), 30);
        assert_eq!(to_centavos(19.999), 2000);
    }

    #[test]
    fn zero_and_negative_amounts() {
        assert_eq!(to_centavos(0.0), 0);
        assert_eq!(to_centavos(-12.34), -1234);
        assert_eq!(to_reais(-1234), -12.34);
    }
}
