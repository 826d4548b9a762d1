use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, clap::ValueEnum, strum::Display, strum::EnumString, strum::VariantNames)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CompilationLevel {
	#[value(name = "WHITESPACE_ONLY")]
	WhitespaceOnly,
	#[value(name = "SIMPLE")]
	Simple,
	#[default]
	#[value(name = "ADVANCED")]
	Advanced,
}

/// Values accepted by `--language_in` and `--language_out`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, clap::ValueEnum, strum::Display, strum::EnumString, strum::VariantNames)]
pub enum LanguageMode {
	#[serde(rename = "ECMASCRIPT3")]
	#[strum(serialize = "ECMASCRIPT3")]
	#[value(name = "ECMASCRIPT3")]
	Ecmascript3,
	#[serde(rename = "ECMASCRIPT5")]
	#[strum(serialize = "ECMASCRIPT5")]
	#[value(name = "ECMASCRIPT5")]
	Ecmascript5,
	#[serde(rename = "ECMASCRIPT5_STRICT")]
	#[strum(serialize = "ECMASCRIPT5_STRICT")]
	#[value(name = "ECMASCRIPT5_STRICT")]
	Ecmascript5Strict,
	#[default]
	#[serde(rename = "ECMASCRIPT6")]
	#[strum(serialize = "ECMASCRIPT6")]
	#[value(name = "ECMASCRIPT6")]
	Ecmascript6,
	#[serde(rename = "ECMASCRIPT_2016")]
	#[strum(serialize = "ECMASCRIPT_2016")]
	#[value(name = "ECMASCRIPT_2016")]
	Ecmascript2016,
	#[serde(rename = "ECMASCRIPT_2017")]
	#[strum(serialize = "ECMASCRIPT_2017")]
	#[value(name = "ECMASCRIPT_2017")]
	Ecmascript2017,
	#[serde(rename = "ECMASCRIPT_2018")]
	#[strum(serialize = "ECMASCRIPT_2018")]
	#[value(name = "ECMASCRIPT_2018")]
	Ecmascript2018,
	#[serde(rename = "ECMASCRIPT_2019")]
	#[strum(serialize = "ECMASCRIPT_2019")]
	#[value(name = "ECMASCRIPT_2019")]
	Ecmascript2019,
	#[serde(rename = "ECMASCRIPT_2020")]
	#[strum(serialize = "ECMASCRIPT_2020")]
	#[value(name = "ECMASCRIPT_2020")]
	Ecmascript2020,
	#[serde(rename = "ECMASCRIPT_NEXT")]
	#[strum(serialize = "ECMASCRIPT_NEXT")]
	#[value(name = "ECMASCRIPT_NEXT")]
	EcmascriptNext,
}
