//! Fisher–Yates シャッフル
//!
//! 呼び出し元のスライスは変更せず、コピーを並び替えて返す。

use rand::RngExt;

/// スライスのコピーを一様ランダムな順列に並び替えて返す
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut rng = rand::rng();
    shuffle_with(items, &mut rng)
}

/// 乱数生成器を指定してシャッフルする
///
/// 末尾から1まで、`[0, i]` の一様乱数 `j` を引いて `i` と `j` を交換する。
pub fn shuffle_with<T: Clone, R: RngExt>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
