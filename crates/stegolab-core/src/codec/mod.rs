pub mod codec_options;
pub mod decoder;
pub mod encoder;
pub mod lsb_codec;

pub use codec_options::CodecOptions;
pub use decoder::ChannelDecoder;
pub use encoder::{ChannelEncoder, HideBit};
pub use lsb_codec::LsbCodec;
