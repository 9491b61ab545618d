//! Non-owning view over one block of planar audio.

use crate::error::EngineError;

/// Per-channel sample slices of equal length, processed in place.
///
/// The block borrows the host's buffers for the duration of one processing
/// call and never outlives it.
///
/// # Example
///
/// ```rust
/// use chorus_effect::AudioBlock;
///
/// let mut left = [0.0f32; 64];
/// let mut right = [0.0f32; 64];
/// let mut channels = [&mut left[..], &mut right[..]];
/// let block = AudioBlock::new(&mut channels).unwrap();
/// assert_eq!(block.num_channels(), 2);
/// assert_eq!(block.num_samples(), 64);
/// ```
#[derive(Debug)]
pub struct AudioBlock<'a, 'b> {
    channels: &'a mut [&'b mut [f32]],
    num_samples: usize,
}

impl<'a, 'b> AudioBlock<'a, 'b> {
    /// Wraps `channels`, which must all have the same length.
    ///
    /// An empty channel list is a valid zero-length block.
    pub fn new(channels: &'a mut [&'b mut [f32]]) -> Result<Self, EngineError> {
        let num_samples = channels.first().map_or(0, |c| c.len());
        if let Some((channel, len)) = channels
            .iter()
            .map(|c| c.len())
            .enumerate()
            .find(|&(_, len)| len != num_samples)
        {
            return Err(EngineError::ChannelLengthMismatch {
                channel,
                len,
                expected: num_samples,
            });
        }

        Ok(Self {
            channels,
            num_samples,
        })
    }

    /// Number of channels.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Samples of `channel`.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= num_channels()`.
    #[inline]
    pub fn channel(&self, channel: usize) -> &[f32] {
        &self.channels[channel]
    }

    /// Mutable samples of `channel`.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= num_channels()`.
    #[inline]
    pub fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        &mut self.channels[channel]
    }

    /// All channels, mutably.
    #[inline]
    pub(crate) fn channels_mut(&mut self) -> &mut [&'b mut [f32]] {
        &mut *self.channels
    }

    /// Silences every channel from `first` onward.
    ///
    /// Hosts with more output than input channels call this before
    /// processing so the extra outputs carry no stale data.
    pub fn clear_channels_from(&mut self, first: usize) {
        for channel in self.channels.iter_mut().skip(first) {
            channel.fill(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_channels() {
        let mut a = [0.0f32; 8];
        let mut b = [0.0f32; 7];
        let mut channels = [&mut a[..], &mut b[..]];
        let err = AudioBlock::new(&mut channels).unwrap_err();
        assert_eq!(
            err,
            EngineError::ChannelLengthMismatch {
                channel: 1,
                len: 7,
                expected: 8
            }
        );
    }

    #[test]
    fn empty_block() {
        let mut channels: [&mut [f32]; 0] = [];
        let block = AudioBlock::new(&mut channels).unwrap();
        assert_eq!(block.num_channels(), 0);
        assert_eq!(block.num_samples(), 0);
    }

    #[test]
    fn clear_channels_from() {
        let mut a = [1.0f32; 4];
        let mut b = [1.0f32; 4];
        let mut c = [1.0f32; 4];
        let mut channels = [&mut a[..], &mut b[..], &mut c[..]];
        let mut block = AudioBlock::new(&mut channels).unwrap();
        block.clear_channels_from(1);
        assert_eq!(block.channel(0), &[1.0; 4]);
        assert_eq!(block.channel(1), &[0.0; 4]);
        assert_eq!(block.channel(2), &[0.0; 4]);
    }

    #[test]
    fn channel_mut_writes_through() {
        let mut a = [0.0f32; 4];
        {
            let mut channels = [&mut a[..]];
            let mut block = AudioBlock::new(&mut channels).unwrap();
            block.channel_mut(0)[2] = 0.5;
        }
        assert_eq!(a[2], 0.5);
    }
}
