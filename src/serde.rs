use crate::{FixedVec, HybridVec};
use alloc::format;
use core::marker::PhantomData;
use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

/// Upper bound, in bytes, of what a length hint may pre-allocate.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

fn serialize_slice<T: Serialize, S: Serializer>(slice: &[T], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(slice.len()))?;
    for element in slice {
        seq.serialize_element(element)?;
    }
    seq.end()
}

impl<T: Serialize, const N: usize> Serialize for FixedVec<T, N> {
    /// Serialize a `FixedVec` as a sequence of its active elements.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_slice(self.as_slice(), serializer)
    }
}

impl<T: Serialize, const N: usize> Serialize for HybridVec<T, N> {
    /// Serialize a `HybridVec` as a sequence.
    ///
    /// The format is identical whether the data is stored inline or on the heap.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_slice(self.as_slice(), serializer)
    }
}

impl<'de, T: Deserialize<'de> + Default, const N: usize> Deserialize<'de> for HybridVec<T, N> {
    /// Deserialize a `HybridVec` from a sequence.
    ///
    /// If the sequence is longer than `N`, the data ends up on the heap.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HybridVecVisitor<T, const N: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de> + Default, const N: usize> Visitor<'de> for HybridVecVisitor<T, N> {
            type Value = HybridVec<T, N>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                // The hint comes from the input, so it only bounds the pre-allocation.
                let mut vec = match seq.size_hint() {
                    Some(hint) => {
                        HybridVec::with_capacity(hint.min(MAX_PREALLOC_BYTES / size_of::<T>().max(1)))
                    }
                    None => HybridVec::new(),
                };

                while let Some(element) = seq.next_element()? {
                    vec.push(element);
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(HybridVecVisitor {
            _marker: PhantomData,
        })
    }
}

impl<'de, T: Deserialize<'de> + Default, const N: usize> Deserialize<'de> for FixedVec<T, N> {
    /// Deserialize a `FixedVec` from a sequence.
    ///
    /// Fails with a custom error if the sequence is longer than `N`.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FixedVecVisitor<T, const N: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de> + Default, const N: usize> Visitor<'de> for FixedVecVisitor<T, N> {
            type Value = FixedVec<T, N>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(formatter, "a sequence of at most {N} elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                if let Some(hint) = seq.size_hint() {
                    if hint > N {
                        return Err(de::Error::invalid_length(hint, &self));
                    }
                }

                let mut vec = FixedVec::new();

                while let Some(element) = seq.next_element()? {
                    if let Err(err) = vec.try_push(element) {
                        return Err(de::Error::custom(format!(
                            "FixedVec capacity {N} exceeded while deserializing sequence: {}",
                            err.simplify()
                        )));
                    }
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(FixedVecVisitor {
            _marker: PhantomData,
        })
    }
}
