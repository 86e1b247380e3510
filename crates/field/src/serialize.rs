//! Big-endian binary codec for keys and records
//!
//! Integers are 4-byte big-endian, booleans a single byte, strings and
//! vectors carry a `u32` element count, field elements are 32-byte big-endian
//! canonical integers and G1 points are `x || y`. The point at infinity is
//! written with both coordinates zero, which no curve point can have.

use crate::{Fq, G1Affine, Scalar};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField, Zero};
use ark_serialize::CanonicalDeserialize;
use byteorder::{BigEndian, ByteOrder};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while decoding a byte buffer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Unexpected end of buffer: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },
    #[error("Non-canonical field element")]
    InvalidFieldElement,
    #[error("Point is not on the curve or not in the prime-order subgroup")]
    InvalidPoint,
    #[error("Invalid boolean byte {0:#04x}")]
    InvalidBool(u8),
    #[error("Invalid UTF-8 string: {0}")]
    InvalidUtf8(String),
    #[error("Duplicate map key: {0}")]
    DuplicateKey(String),
    #[error("Unknown circuit type {0}")]
    UnknownCircuitType(u32),
    #[error("Buffer ends inside an optional trailing section")]
    PartialTrailingSection,
    #[error("{0} trailing bytes after the last field")]
    TrailingBytes(usize),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, SerializationError>;

/// Growable output buffer
#[derive(Debug, Default, Clone)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut bytes = [0u8; 4];
        BigEndian::write_u32(&mut bytes, value);
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a `u32` length prefix.
    ///
    /// # Panics
    ///
    /// If `len` does not fit in a `u32`; the prefix would not describe the
    /// bytes that follow.
    pub fn write_len(&mut self, len: usize) {
        match u32::try_from(len) {
            Ok(len) => self.write_u32(len),
            Err(_) => panic!("length {} does not fit a u32 prefix", len),
        }
    }

    pub fn write_string(&mut self, value: &str) {
        self.write_len(value.len());
        self.write_bytes(value.as_bytes());
    }

    pub fn write_scalar(&mut self, value: &Scalar) {
        self.write_bytes(&value.into_bigint().to_bytes_be());
    }

    pub fn write_fq(&mut self, value: &Fq) {
        self.write_bytes(&value.into_bigint().to_bytes_be());
    }

    pub fn write_g1(&mut self, point: &G1Affine) {
        if point.infinity {
            self.write_bytes(&[0u8; 64]);
        } else {
            self.write_fq(&point.x);
            self.write_fq(&point.y);
        }
    }

    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) {
        value.encode(self);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor over an input buffer
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Fails unless every byte has been consumed
    pub fn finish(&self) -> Result<()> {
        match self.buf.len() {
            0 => Ok(()),
            n => Err(SerializationError::TrailingBytes(n)),
        }
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.buf.len() < len {
            return Err(SerializationError::UnexpectedEnd {
                needed: len,
                remaining: self.buf.len(),
            });
        }
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        match self.read_bytes(1)?[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(SerializationError::InvalidBool(other)),
        }
    }

    pub fn read_len(&mut self) -> Result<usize> {
        Ok(self.read_u32()? as usize)
    }

    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_len()?;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|e| SerializationError::InvalidUtf8(e.to_string()))
    }

    pub fn read_scalar(&mut self) -> Result<Scalar> {
        let bytes = self.read_array32()?;
        scalar_from_be_bytes(&bytes).ok_or(SerializationError::InvalidFieldElement)
    }

    pub fn read_fq(&mut self) -> Result<Fq> {
        let bytes = self.read_array32()?;
        fq_from_be_bytes(&bytes).ok_or(SerializationError::InvalidFieldElement)
    }

    pub fn read_g1(&mut self) -> Result<G1Affine> {
        let x = self.read_fq()?;
        let y = self.read_fq()?;
        if x.is_zero() && y.is_zero() {
            return Ok(<G1Affine as AffineRepr>::zero());
        }
        let point = G1Affine::new_unchecked(x, y);
        if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(SerializationError::InvalidPoint);
        }
        Ok(point)
    }

    pub fn read<T: Decode>(&mut self) -> Result<T> {
        T::decode(self)
    }

    fn read_array32(&mut self) -> Result<[u8; 32]> {
        let mut out = [0u8; 32];
        out.copy_from_slice(self.read_bytes(32)?);
        Ok(out)
    }
}

/// Canonical scalar from 32 big-endian bytes, `None` if not below the modulus
pub fn scalar_from_be_bytes(bytes: &[u8; 32]) -> Option<Scalar> {
    let mut le = *bytes;
    le.reverse();
    Scalar::deserialize_uncompressed(&le[..]).ok()
}

/// Canonical base-field element from 32 big-endian bytes
pub fn fq_from_be_bytes(bytes: &[u8; 32]) -> Option<Fq> {
    let mut le = *bytes;
    le.reverse();
    Fq::deserialize_uncompressed(&le[..]).ok()
}

/// Types with a binary encoding
pub trait Encode {
    fn encode(&self, writer: &mut Writer);

    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        self.encode(&mut writer);
        writer.into_bytes()
    }
}

/// Types decodable from their binary encoding
pub trait Decode: Sized {
    fn decode(reader: &mut Reader<'_>) -> Result<Self>;

    /// Decodes a value that must span the whole buffer
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(bytes);
        let value = Self::decode(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }
}

impl Encode for u32 {
    fn encode(&self, writer: &mut Writer) {
        writer.write_u32(*self);
    }
}

impl Decode for u32 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_u32()
    }
}

impl Encode for bool {
    fn encode(&self, writer: &mut Writer) {
        writer.write_bool(*self);
    }
}

impl Decode for bool {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_bool()
    }
}

impl Encode for str {
    fn encode(&self, writer: &mut Writer) {
        writer.write_string(self);
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut Writer) {
        writer.write_string(self);
    }
}

impl Decode for String {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_string()
    }
}

impl Encode for Scalar {
    fn encode(&self, writer: &mut Writer) {
        writer.write_scalar(self);
    }
}

impl Decode for Scalar {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_scalar()
    }
}

impl Encode for G1Affine {
    fn encode(&self, writer: &mut Writer) {
        writer.write_g1(self);
    }
}

impl Decode for G1Affine {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_g1()
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, writer: &mut Writer) {
        writer.write_len(self.len());
        for item in self {
            item.encode(writer);
        }
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut Writer) {
        self.as_slice().encode(writer);
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        let count = reader.read_len()?;
        // Every element occupies at least one byte.
        let mut items = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            items.push(T::decode(reader)?);
        }
        Ok(items)
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, writer: &mut Writer) {
        writer.write_len(self.len());
        for (key, value) in self {
            key.encode(writer);
            value.encode(writer);
        }
    }
}

impl<K, V> Decode for BTreeMap<K, V>
where
    K: Decode + Ord + std::fmt::Debug,
    V: Decode,
{
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        let count = reader.read_len()?;
        let mut map = BTreeMap::new();
        for _ in 0..count {
            let key = K::decode(reader)?;
            let value = V::decode(reader)?;
            if map.contains_key(&key) {
                return Err(SerializationError::DuplicateKey(format!("{:?}", key)));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}
