/// A TypedStruct contains an arbitrary JSON serialized protocol buffer
/// message with a URL that describes the type of the serialized message. This
/// is very similar to google.protobuf.Any, instead of having protocol buffer
/// binary, this employs google.protobuf.Struct as value.
///
/// This message is intended to be embedded inside Any, so it shouldn't be
/// directly referred from other xDS messages.
///
/// When packing an opaque extension config, packing the expected type into
/// Any is preferred wherever possible for its efficiency. TypedStruct should
/// be used only if a proto descriptor is not available, for example if:
/// - A control plane sends opaque message that is originally from external
///   source in JSON form.
/// - The control plane doesn't have the knowledge of the message type and it
///   is expected that the data plane knows how to utilize it.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypedStruct {
    /// A URL that uniquely identifies the type of the serialize protocol
    /// buffer message. This has same semantics and format described in
    /// google.protobuf.Any:
    /// <https://github.com/protocolbuffers/protobuf/blob/master/src/google/protobuf/any.proto>
    #[prost(string, tag = "1")]
    pub type_url: ::prost::alloc::string::String,
    /// A JSON representation of the above specified type.
    #[prost(message, optional, tag = "2")]
    pub value: ::core::option::Option<::prost_types::Struct>,
}
