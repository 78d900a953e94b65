//! 文本转语音模块
//!
//! 该模块处理 S3 对象创建事件：读取 `text/` 下的 `.txt` 文件，交给 Polly 合成语音，
//! 再把 MP3 写回同一存储桶的 `audio/` 前缀下。

pub mod event;
pub mod handler;
pub mod store;
pub mod synth;

pub use event::{ObjectRef, audio_key_for, is_convertible_key};
pub use handler::{ConversionResponse, TextToSpeech};
pub use store::ObjectStore;
pub use synth::SpeechSynthesizer;
