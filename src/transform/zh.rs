use std::collections::HashMap;

use super::{Normalizer, ScriptConverter};

/// High-frequency simplified → traditional mappings seen in the news
/// corpora. One-to-many simplifications (干, 发/髮, 里/裡, ...) are left out;
/// unmapped characters pass through unchanged.
const SIMPLIFIED_TO_TRADITIONAL: &[(char, char)] = &[
    ('爱', '愛'), ('罢', '罷'), ('备', '備'), ('笔', '筆'), ('币', '幣'), ('边', '邊'),
    ('变', '變'), ('标', '標'), ('别', '別'), ('产', '產'), ('长', '長'), ('车', '車'),
    ('陈', '陳'), ('称', '稱'), ('迟', '遲'), ('处', '處'), ('传', '傳'), ('创', '創'),
    ('从', '從'), ('达', '達'), ('带', '帶'), ('担', '擔'), ('单', '單'), ('当', '當'),
    ('党', '黨'), ('导', '導'), ('灯', '燈'), ('点', '點'), ('电', '電'), ('东', '東'),
    ('动', '動'), ('断', '斷'), ('对', '對'), ('队', '隊'), ('儿', '兒'), ('尔', '爾'),
    ('发', '發'), ('飞', '飛'), ('费', '費'), ('风', '風'), ('钢', '鋼'), ('个', '個'),
    ('给', '給'), ('构', '構'), ('购', '購'), ('顾', '顧'), ('关', '關'), ('观', '觀'),
    ('广', '廣'), ('规', '規'), ('国', '國'), ('过', '過'), ('汉', '漢'), ('号', '號'),
    ('后', '後'), ('护', '護'), ('华', '華'), ('画', '畫'), ('话', '話'), ('欢', '歡'),
    ('环', '環'), ('还', '還'), ('会', '會'), ('机', '機'), ('积', '積'), ('鸡', '雞'),
    ('极', '極'), ('际', '際'), ('济', '濟'), ('继', '繼'), ('价', '價'), ('间', '間'), ('见', '見'),
    ('将', '將'), ('讲', '講'), ('阶', '階'), ('节', '節'), ('结', '結'), ('进', '進'),
    ('惊', '驚'), ('经', '經'), ('旧', '舊'), ('举', '舉'), ('据', '據'), ('剧', '劇'),
    ('开', '開'), ('库', '庫'), ('块', '塊'), ('来', '來'), ('蓝', '藍'), ('劳', '勞'),
    ('乐', '樂'), ('类', '類'), ('离', '離'), ('礼', '禮'), ('历', '歷'), ('丽', '麗'),
    ('联', '聯'), ('连', '連'), ('脸', '臉'), ('练', '練'), ('两', '兩'), ('辆', '輛'),
    ('临', '臨'), ('刘', '劉'), ('龙', '龍'), ('楼', '樓'), ('录', '錄'), ('陆', '陸'),
    ('罗', '羅'), ('妈', '媽'), ('马', '馬'), ('买', '買'), ('卖', '賣'), ('满', '滿'),
    ('么', '麼'), ('门', '門'), ('们', '們'), ('梦', '夢'), ('难', '難'), ('脑', '腦'),
    ('内', '內'), ('鸟', '鳥'), ('宁', '寧'), ('农', '農'), ('盘', '盤'), ('评', '評'),
    ('齐', '齊'), ('气', '氣'), ('钱', '錢'), ('枪', '槍'), ('强', '強'), ('亲', '親'),
    ('轻', '輕'), ('请', '請'), ('区', '區'), ('权', '權'), ('确', '確'), ('让', '讓'),
    ('热', '熱'), ('认', '認'), ('荣', '榮'), ('软', '軟'), ('赛', '賽'), ('伤', '傷'),
    ('绍', '紹'), ('审', '審'), ('胜', '勝'), ('师', '師'), ('时', '時'), ('实', '實'),
    ('识', '識'), ('视', '視'), ('试', '試'), ('书', '書'), ('树', '樹'), ('数', '數'),
    ('双', '雙'), ('谁', '誰'), ('说', '說'), ('丝', '絲'), ('虽', '雖'), ('岁', '歲'),
    ('孙', '孫'), ('态', '態'), ('谈', '談'), ('题', '題'), ('体', '體'), ('条', '條'),
    ('听', '聽'), ('头', '頭'), ('图', '圖'), ('团', '團'), ('湾', '灣'), ('万', '萬'),
    ('为', '為'), ('伟', '偉'), ('围', '圍'), ('卫', '衛'), ('闻', '聞'), ('稳', '穩'),
    ('问', '問'), ('无', '無'), ('误', '誤'), ('习', '習'), ('细', '細'), ('显', '顯'),
    ('现', '現'), ('线', '線'), ('乡', '鄉'), ('响', '響'), ('项', '項'), ('写', '寫'),
    ('兴', '興'), ('选', '選'), ('学', '學'), ('压', '壓'), ('亚', '亞'), ('严', '嚴'),
    ('阳', '陽'), ('养', '養'), ('样', '樣'), ('药', '藥'), ('页', '頁'), ('业', '業'),
    ('叶', '葉'), ('医', '醫'), ('亿', '億'), ('义', '義'), ('艺', '藝'), ('议', '議'),
    ('异', '異'), ('译', '譯'), ('阴', '陰'), ('银', '銀'), ('应', '應'), ('营', '營'),
    ('优', '優'), ('邮', '郵'), ('鱼', '魚'), ('与', '與'), ('语', '語'), ('园', '園'),
    ('远', '遠'), ('愿', '願'), ('约', '約'), ('运', '運'), ('杂', '雜'), ('责', '責'),
    ('择', '擇'), ('泽', '澤'), ('这', '這'), ('针', '針'), ('阵', '陣'), ('争', '爭'),
    ('证', '證'), ('郑', '鄭'), ('织', '織'), ('职', '職'), ('执', '執'), ('纸', '紙'),
    ('质', '質'), ('众', '眾'), ('专', '專'), ('转', '轉'), ('装', '裝'), ('状', '狀'),
    ('资', '資'), ('总', '總'), ('组', '組'),
];

/// Simplified → Traditional conversion backed by a fixed character table.
pub struct CharTableConverter {
    table: HashMap<char, char>,
}

impl Default for CharTableConverter {
    fn default() -> Self {
        Self {
            table: SIMPLIFIED_TO_TRADITIONAL.iter().copied().collect(),
        }
    }
}

impl ScriptConverter for CharTableConverter {
    fn convert(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.table.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Cleanup for Chinese text.
///
/// Strips control characters, collapses whitespace runs into a single space
/// and rejects text that ends up empty or mostly non-CJK.
pub struct ZhNormalizer {
    min_cjk_ratio: f64,
}

impl ZhNormalizer {
    pub fn new() -> Self {
        Self { min_cjk_ratio: 0.3 }
    }
}

impl Default for ZhNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer for ZhNormalizer {
    fn normalize(&self, text: &str) -> Option<String> {
        let mut out = String::with_capacity(text.len());
        let mut last_was_space = false;
        for c in text.trim().chars() {
            if c.is_control() {
                continue;
            }
            if c.is_whitespace() {
                if !last_was_space {
                    out.push(' ');
                }
                last_was_space = true;
            } else {
                out.push(c);
                last_was_space = false;
            }
        }

        let out = out.trim().to_string();
        if out.is_empty() {
            return None;
        }

        let total = out.chars().filter(|c| !c.is_whitespace()).count();
        let cjk = out.chars().filter(|c| is_cjk(*c)).count();
        if (cjk as f64) < (total as f64) * self.min_cjk_ratio {
            return None;
        }

        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_maps_simplified_characters() {
        let converter = CharTableConverter::default();
        assert_eq!(converter.convert("中国经济发展"), "中國經濟發展");
    }

    #[test]
    fn test_converter_passes_unmapped_through() {
        let converter = CharTableConverter::default();
        assert_eq!(converter.convert("人民 abc 123"), "人民 abc 123");
    }

    #[test]
    fn test_normalizer_collapses_whitespace() {
        let normalizer = ZhNormalizer::new();
        let out = normalizer.normalize("  新闻\t\t标题   正文\n内容  ").unwrap();
        assert_eq!(out, "新闻 标题 正文 内容");
    }

    #[test]
    fn test_normalizer_strips_control_characters() {
        let normalizer = ZhNormalizer::new();
        let out = normalizer.normalize("新闻\u{0}标题").unwrap();
        assert_eq!(out, "新闻标题");
    }

    #[test]
    fn test_normalizer_rejects_empty() {
        let normalizer = ZhNormalizer::new();
        assert!(normalizer.normalize("   \t\n ").is_none());
    }

    #[test]
    fn test_normalizer_rejects_mostly_non_cjk() {
        let normalizer = ZhNormalizer::new();
        assert!(normalizer.normalize("lorem ipsum dolor sit amet").is_none());
        assert!(normalizer.normalize("股市大涨创新高").is_some());
    }
}
