//! 選択状態モジュール
//!
//! ユーザーが見積もりに選んだ項目と数量を保持する。
//! セッション単位の一時状態で、永続化や共有はしない。

use std::collections::BTreeMap;

/// 選択中の項目と数量
///
/// 1セッション1インスタンス。プロセス全体で共有すると
/// 別セッションの選択が混ざるため、必ず呼び出し側が所有する。
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// 項目ID → 数量（表示が安定するようID順に保持）
    quantities: BTreeMap<String, u64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択をトグルする
    ///
    /// 未選択なら数量1で追加、選択済みなら数量ごと削除する。
    /// 戻り値はトグル後に選択されているかどうか。
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.quantities.remove(id).is_some() {
            false
        } else {
            self.quantities.insert(id.to_string(), 1);
            true
        }
    }

    /// 数量を設定する
    ///
    /// 0以下の数量は拒否し、直前の値を保持する。
    /// 未選択の項目への設定は何もしない（自動選択はしない）。
    pub fn set_quantity(&mut self, id: &str, quantity: u64) {
        if quantity < 1 {
            return;
        }
        if let Some(q) = self.quantities.get_mut(id) {
            *q = quantity;
        }
    }

    /// 選択中かどうか
    pub fn is_selected(&self, id: &str) -> bool {
        self.quantities.contains_key(id)
    }

    /// 選択中の項目の数量
    pub fn quantity(&self, id: &str) -> Option<u64> {
        self.quantities.get(id).copied()
    }

    /// (項目ID, 数量) の組を走査
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.quantities.iter().map(|(id, &q)| (id.as_str(), q))
    }

    /// 選択項目数
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// 全選択を解除
    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}
